//! The package lists.
//!
//! Flat data, no behavior. Identifiers are whatever the owning manager
//! expects on its command line.

/// Third-party Homebrew taps, registered before any formula or cask install.
pub const TAPS: &[&str] = &[
    "homebrew/cask-fonts",
    "homebrew/cask-versions",
    "homebrew/services",
];

/// Command-line packages from Homebrew core.
pub const FORMULAS: &[&str] = &[
    // GNU userland newer than the ancient BSD versions macOS ships
    "coreutils",
    "findutils",
    "gnu-sed",
    "grep",
    "bash",
    "bash-completion@2",
    // Everyday tooling
    "git",
    "git-lfs",
    "wget",
    "curl",
    "openssl@3",
    "gnupg",
    "tree",
    "htop",
    "jq",
    "ripgrep",
    "fd",
    "fzf",
    "tmux",
    "watch",
    "rename",
    "ssh-copy-id",
    // Build toolchain
    "cmake",
    "pkg-config",
    "libyaml",
    "readline",
    // Language runtimes managed through brew
    "python@3.12",
    "ruby",
    "go",
    // Media and archives
    "ffmpeg",
    "imagemagick",
    "p7zip",
    "unar",
];

/// Developer fonts, installed as casks from the fonts tap.
pub const FONTS: &[&str] = &[
    "font-fira-code",
    "font-jetbrains-mono",
    "font-source-code-pro",
    "font-hack-nerd-font",
    "font-inconsolata",
];

/// Finder QuickLook preview plugins.
pub const QUICKLOOK_PLUGINS: &[&str] = &[
    "qlcolorcode",
    "qlstephen",
    "qlmarkdown",
    "quicklook-json",
    "qlimagesize",
    "webpquicklook",
    "quicklook-csv",
];

/// End-user applications installed as casks.
pub const APPLICATIONS: &[&str] = &[
    "iterm2",
    "visual-studio-code",
    "google-chrome",
    "firefox",
    "docker",
    "rectangle",
    "slack",
    "spotify",
    "vlc",
    "the-unarchiver",
    "1password",
    "postman",
];

/// Python libraries installed into the brewed interpreter's site-packages.
pub const PYTHON_PACKAGES: &[&str] = &[
    "virtualenv",
    "ipython",
    "requests",
    "black",
    "flake8",
];

/// Ruby gems.
pub const RUBY_GEMS: &[&str] = &["bundler", "rake", "pry"];

/// Go tools, fetched as modules. The binary name used for the presence
/// probe is the last path segment before the version suffix.
pub const GO_TOOLS: &[&str] = &[
    "golang.org/x/tools/gopls@latest",
    "github.com/go-delve/delve/cmd/dlv@latest",
    "honnef.co/go/tools/cmd/staticcheck@latest",
];
