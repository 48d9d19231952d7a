//! Generate TeX bindings for the FontAwesome icon font
mod alias;
mod css;
mod emit;
mod encoding;
mod error;
mod fetch;
mod tables;
mod tex;
mod tools;

use clap::Parser;
use error::FatexError;
use std::collections::HashSet;
use std::fs;
use std::fs::File;
use std::path::Path;

/// Generate (pdf/Xe/Lua)TeX bindings for the FontAwesome icon font
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Increase logging
    #[clap(short, long, parse(from_occurrences))]
    verbose: usize,

    /// FontAwesome version, such as "4.3.0"
    version: String,
}

/*
    The run is one straight line:

    1) fetch.rs puts FontAwesome.otf and FontAwesome.css in the working
       directory (skipping the download when the right version is already
       here) and rescales the font to 1000upm on first acquisition.
    2) css.rs scrapes the stylesheet into glyph records and alias edges;
       alias.rs flattens the edges into alias -> canonical name.
    3) The generic and xe-/luatex symbol lists come straight from those.
    4) For pdfTeX, encoding.rs turns the font's own glyph list (otfinfo -g)
       into sorted 256-slot encoding pages; otftotfm converts each page and
       hands back one map line.
    5) emit.rs writes the enc/map/fd files, expands the package and
       showcase templates, and writes the paged pdfTeX symbol list.
*/

// otftotfm output directories. All flat for now; point these into a texmf
// tree to install directly.
const TFM_DIR: &str = "./";
const ENC_DIR: &str = "./";
const TYPE1_DIR: &str = "./";

const ERROR_LOG: &str = "otftotfm_errors.log";
const STY_TEMPLATE: &str = "templates/fontawesome.sty.template";
const DOC_TEMPLATE: &str = "templates/fontawesome.tex.template";
const MAPLINES_MARKER: &str = "% <maplines go here>";
const SHOWCASE_MARKER: &str = "% <showcaseicon commands go here>";

fn main() {
    // Command line handling
    let args = Args::parse();

    env_logger::init_from_env(env_logger::Env::default().filter_or(
        env_logger::DEFAULT_FILTER_ENV,
        match args.verbose {
            0 => "info",
            _ => "debug",
        },
    ));

    if let Err(e) = run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), FatexError> {
    fetch::ensure_font(&args.version)?;
    let font = Path::new(fetch::FONT_FILE);

    // Stylesheet side: records and resolved aliases
    log::info!("Identifying glyphs from css...");
    let stylesheet =
        fs::read_to_string(fetch::CSS_FILE).map_err(FatexError::io(fetch::CSS_FILE))?;
    let (glyphs, edges) = css::parse_stylesheet(&stylesheet);
    let class_names: HashSet<String> = glyphs.iter().map(|g| g.name.clone()).collect();
    let aliases = alias::resolve(&edges, &class_names)?;
    log::info!("{} unique glyphs, {} aliases", class_names.len(), aliases.len());
    for (alias, target) in &aliases {
        log::debug!("  {} => {}", alias, target);
    }

    let overrides = tables::macro_overrides();

    log::info!("Generating the generic symbol list...");
    emit::write(
        "fontawesomesymbols-generic.tex",
        &emit::generic_symbols(&glyphs, &aliases, &overrides),
    )?;

    log::info!("Generating the xe-/luatex symbol list...");
    emit::write(
        "fontawesomesymbols-xeluatex.tex",
        &emit::xeluatex_symbols(&glyphs, &aliases),
    )?;

    // Font side: the font's own glyph list drives the encoding pages
    log::info!("Generating the pdftex symbol list...");
    let font_names = tools::glyph_names(font)?;
    let names = encoding::stylesheet_names(&font_names, &tables::rename_table());

    // The two views of the icon set should agree; the font wins if not.
    let canonical: HashSet<String> = glyphs
        .iter()
        .map(|g| aliases.get(&g.name).unwrap_or(&g.name).clone())
        .collect();
    encoding::report_name_mismatch(&canonical, &names);

    let pages = encoding::paginate(&names)?;
    for page in &pages {
        let enc_name = format!("{}.enc", page.stem());
        emit::write(&enc_name, &emit::enc_file(page))?;
    }

    // One otftotfm run per page; each prints the map line for its font.
    let mut error_log = File::create(ERROR_LOG).map_err(FatexError::io(ERROR_LOG))?;
    let mut maplines = Vec::new();
    for page in &pages {
        let enc_name = format!("{}.enc", page.stem());
        log::info!("Converting page {} ({})", page.number, enc_name);
        maplines.push(tools::convert_page(
            font,
            &enc_name,
            TFM_DIR,
            ENC_DIR,
            TYPE1_DIR,
            &mut error_log,
        )?);
    }

    emit::write("fontawesome.map", &emit::map_file(&maplines))?;
    for page in &pages {
        emit::write(&format!("{}.fd", page.stem()), &emit::fd_file(page))?;
    }
    emit::write_from_template(
        STY_TEMPLATE,
        "fontawesome.sty",
        MAPLINES_MARKER,
        &emit::package_font_lines(&pages, &maplines),
    )?;
    emit::write("fontawesomesymbols-pdftex.tex", &emit::pdftex_symbols(&names))?;

    log::info!("Generating the documentation...");
    emit::write_from_template(
        DOC_TEMPLATE,
        "fontawesome.tex",
        SHOWCASE_MARKER,
        &emit::showcase_lines(&glyphs, &aliases, &overrides),
    )?;

    log::info!("Done");
    Ok(())
}
