//! Static product configuration shared across clipsynce crates

/// Product configuration
pub struct Config {
    /// Product label shown in the page heading and document title
    pub name: &'static str,
    pub tagline: &'static str,
}

pub static CONFIG: Config = Config {
    name: "clipsynce",
    tagline: "Translate the soundtrack of a video clip",
};
