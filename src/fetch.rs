//! Gets `FontAwesome.otf` and `FontAwesome.css` into the working directory
//! for the requested release, downloading only when the font on disk is
//! missing or the wrong version.

use crate::error::FatexError;
use crate::tools;
use std::fs;
use std::path::Path;

pub const FONT_FILE: &str = "FontAwesome.otf";
pub const CSS_FILE: &str = "FontAwesome.css";

pub fn ensure_font(version: &str) -> Result<(), FatexError> {
    if Path::new(FONT_FILE).is_file() {
        let present = tools::otf_version(Path::new(FONT_FILE))?;
        if present == version {
            log::info!("Font already present");
            return Ok(());
        }
        log::info!("Font is version {}, want {}", present, version);
    }
    download(version)?;
    normalize_upm()
}

fn download(version: &str) -> Result<(), FatexError> {
    log::info!("Downloading the font and css...");
    let archive = format!("font-awesome-{}.zip", version);
    let tree = format!("font-awesome-{}", version);
    tools::curl(&format!("http://fontawesome.io/assets/{}", archive))?;
    tools::unzip(&archive)?;
    let font_src = format!("{}/fonts/{}", tree, FONT_FILE);
    fs::rename(&font_src, FONT_FILE).map_err(FatexError::io(&font_src))?;
    let css_src = format!("{}/css/font-awesome.css", tree);
    fs::rename(&css_src, CSS_FILE).map_err(FatexError::io(&css_src))?;
    fs::remove_file(&archive).map_err(FatexError::io(&archive))?;
    fs::remove_dir_all(&tree).map_err(FatexError::io(&tree))?;
    Ok(())
}

// xdvipdfmx sizes the glyphs wrongly unless the font is 1000 units per em,
// cfr http://tex.stackexchange.com/questions/134121
fn normalize_upm() -> Result<(), FatexError> {
    log::info!("Converting the font to 1000 upm...");
    let rescaled = "FontAwesome-1000upm.otf";
    tools::rescale_upm(FONT_FILE, rescaled, 1000)?;
    fs::rename(rescaled, FONT_FILE).map_err(FatexError::io(rescaled))?;
    Ok(())
}
