use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Page template containing the essays container
    pub template_path: PathBuf,
    /// Where the rendered page is written
    pub output_path: PathBuf,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            template_path: env::var("SITE_TEMPLATE_PATH")
                .unwrap_or_else(|_| "index.html".to_string())
                .into(),
            output_path: env::var("SITE_OUTPUT_PATH")
                .unwrap_or_else(|_| "dist/index.html".to_string())
                .into(),
        }
    }
}
