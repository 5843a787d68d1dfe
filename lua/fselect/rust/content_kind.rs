use std::path::Path;

/// Bytes inspected for NUL when deciding whether a file is binary.
const BINARY_CHECK_SIZE: usize = 8 * 1024;

pub trait ContentKindClassifier: Send + Sync {
    /// Returns a Neovim filetype-style label, or `None` when the kind cannot be determined.
    fn classify(&self, filename: &str, content: &[u8]) -> Option<String>;
}

/// Classifies by well-known file names, then extension, then a NUL-byte sniff.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtensionClassifier;

impl ContentKindClassifier for ExtensionClassifier {
    fn classify(&self, filename: &str, content: &[u8]) -> Option<String> {
        let path = Path::new(filename);
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or(filename);

        if let Some(kind) = kind_for_file_name(name) {
            return Some(kind.to_string());
        }

        let by_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| kind_for_extension(&ext.to_ascii_lowercase()));
        if let Some(kind) = by_extension {
            return Some(kind.to_string());
        }

        if is_binary(content) {
            return Some("binary".to_string());
        }

        None
    }
}

#[inline]
pub fn is_binary(content: &[u8]) -> bool {
    content.iter().take(BINARY_CHECK_SIZE).any(|&byte| byte == 0)
}

fn kind_for_file_name(name: &str) -> Option<&'static str> {
    let kind = match name {
        "Makefile" | "makefile" | "GNUmakefile" => "make",
        "Dockerfile" | "Containerfile" => "dockerfile",
        "CMakeLists.txt" => "cmake",
        "Cargo.lock" | "Pipfile" => "toml",
        "Gemfile" | "Rakefile" => "ruby",
        "Justfile" | "justfile" => "just",
        ".gitignore" | ".dockerignore" => "gitignore",
        ".bashrc" | ".bash_profile" | ".profile" => "sh",
        ".zshrc" => "zsh",
        _ => return None,
    };
    Some(kind)
}

fn kind_for_extension(extension: &str) -> Option<&'static str> {
    let kind = match extension {
        "rs" => "rust",
        "lua" => "lua",
        "vim" => "vim",
        "py" | "pyi" => "python",
        "js" | "mjs" | "cjs" => "javascript",
        "jsx" => "javascriptreact",
        "ts" | "mts" | "cts" => "typescript",
        "tsx" => "typescriptreact",
        "go" => "go",
        "c" | "h" => "c",
        "cc" | "cpp" | "cxx" | "hh" | "hpp" | "hxx" => "cpp",
        "cs" => "cs",
        "java" => "java",
        "kt" | "kts" => "kotlin",
        "swift" => "swift",
        "rb" => "ruby",
        "php" => "php",
        "zig" => "zig",
        "nix" => "nix",
        "sh" | "bash" => "sh",
        "zsh" => "zsh",
        "fish" => "fish",
        "md" | "markdown" => "markdown",
        "json" => "json",
        "jsonc" => "jsonc",
        "toml" => "toml",
        "yaml" | "yml" => "yaml",
        "xml" => "xml",
        "html" | "htm" => "html",
        "css" => "css",
        "scss" => "scss",
        "vue" => "vue",
        "svelte" => "svelte",
        "sql" => "sql",
        "txt" => "text",
        _ => return None,
    };
    Some(kind)
}
