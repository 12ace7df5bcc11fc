/// Configuration for a shell session
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub prompt: String,
    pub show_banner: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "graph> ".to_string(),
            show_banner: true,
        }
    }
}
