/// Configuration for the frontend application

/// Base path prepended to static assets
/// - Served from the site root: "" (assets resolve next to the page)
/// - For GitHub Pages: "/portfolio/"
#[cfg(not(feature = "github-pages"))]
pub const BASE_URL: &str = "";

/// Base path when published under a GitHub Pages project site
#[cfg(feature = "github-pages")]
pub const BASE_URL: &str = "/portfolio/";

/// Contact endpoint - 编译时从环境变量读取，默认相对路径
pub const CONTACT_ENDPOINT: &str = match option_env!("PORTFOLIO_CONTACT_ENDPOINT") {
    Some(url) => url,
    None => "/submit-contact",
};

/// Helper function to construct asset paths
pub fn asset_path(path: &str) -> String {
    // Remove leading slash if present
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}{}", BASE_URL, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_path_strips_leading_slash() {
        assert_eq!(asset_path("/photo-dark.png"), format!("{BASE_URL}photo-dark.png"));
        assert_eq!(asset_path("photo-light.png"), format!("{BASE_URL}photo-light.png"));
    }
}
