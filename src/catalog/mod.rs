//! The built-in provisioning catalog.
//!
//! A catalog is a fixed, ordered list of [`Category`] values, each naming
//! the items one external package manager should end up owning. Items are
//! opaque identifiers passed verbatim to that manager; nothing here
//! inspects their structure.
//!
//! The lists themselves live in [`items`] and are plain data: editing a
//! machine's bootstrap means editing those slices, nothing else.

pub mod items;

/// Which external manager owns a category's namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManagerKind {
    /// `brew tap` third-party source repositories.
    Tap,
    /// `brew` command-line formulas.
    Formula,
    /// `brew --cask` prebuilt applications, fonts, and plugins.
    Cask,
    /// `pip3` Python packages.
    Pip,
    /// `gem` Ruby gems.
    Gem,
    /// `go install` module tools.
    Go,
}

impl ManagerKind {
    /// Human-readable manager name for status lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::Tap => "brew tap",
            Self::Formula => "brew",
            Self::Cask => "brew cask",
            Self::Pip => "pip3",
            Self::Gem => "gem",
            Self::Go => "go",
        }
    }
}

/// A named, ordered group of items installed through one external manager.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    /// Display name (e.g. "Fonts").
    pub name: &'static str,
    /// The manager whose namespace the items live in.
    pub kind: ManagerKind,
    /// Item identifiers, in install order.
    pub items: &'static [&'static str],
}

/// The fixed category sequence of a bootstrap run.
///
/// Order matters and is part of the contract: taps must precede the
/// formulas and casks they provide, and the whole sequence is what users
/// see scroll by on every run.
pub const CATALOG: &[Category] = &[
    Category {
        name: "Taps",
        kind: ManagerKind::Tap,
        items: items::TAPS,
    },
    Category {
        name: "Formulas",
        kind: ManagerKind::Formula,
        items: items::FORMULAS,
    },
    Category {
        name: "Fonts",
        kind: ManagerKind::Cask,
        items: items::FONTS,
    },
    Category {
        name: "QuickLook plugins",
        kind: ManagerKind::Cask,
        items: items::QUICKLOOK_PLUGINS,
    },
    Category {
        name: "Applications",
        kind: ManagerKind::Cask,
        items: items::APPLICATIONS,
    },
    Category {
        name: "Python packages",
        kind: ManagerKind::Pip,
        items: items::PYTHON_PACKAGES,
    },
    Category {
        name: "Ruby gems",
        kind: ManagerKind::Gem,
        items: items::RUBY_GEMS,
    },
    Category {
        name: "Go tools",
        kind: ManagerKind::Go,
        items: items::GO_TOOLS,
    },
];
