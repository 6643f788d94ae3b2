//! Lookup tables behind blend derivation.
//!
//! Every lookup has a fallback for tokens it does not know.

use serde::{Deserialize, Serialize};

/// Tasting notes for one flavor, ordered from lightest to darkest roast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlavorProfile {
    pub token: &'static str,
    pub notes: &'static [&'static str],
    /// Roast that shows this flavor off best.
    pub roast_affinity: &'static str,
}

pub static FLAVOR_PROFILES: [FlavorProfile; 8] = [
    FlavorProfile {
        token: "chocolate",
        notes: &["cocoa nib", "milk chocolate", "dark chocolate"],
        roast_affinity: "dark",
    },
    FlavorProfile {
        token: "nutty",
        notes: &["almond", "hazelnut", "roasted walnut"],
        roast_affinity: "medium",
    },
    FlavorProfile {
        token: "caramel",
        notes: &["honey", "caramel", "burnt sugar"],
        roast_affinity: "medium",
    },
    FlavorProfile {
        token: "fruity",
        notes: &["red berry", "stone fruit", "dried fig"],
        roast_affinity: "light",
    },
    FlavorProfile {
        token: "citrus",
        notes: &["lemon zest", "bergamot", "candied orange"],
        roast_affinity: "light",
    },
    FlavorProfile {
        token: "floral",
        notes: &["jasmine", "orange blossom", "dried rose"],
        roast_affinity: "light",
    },
    FlavorProfile {
        token: "spicy",
        notes: &["cardamom", "cinnamon", "clove"],
        roast_affinity: "dark",
    },
    FlavorProfile {
        token: "earthy",
        notes: &["fresh cedar", "tobacco leaf", "forest floor"],
        roast_affinity: "dark",
    },
];

/// Profile for a flavor token; unknown tokens get the chocolate profile.
pub fn flavor_profile(token: &str) -> &'static FlavorProfile {
    FLAVOR_PROFILES
        .iter()
        .find(|p| p.token == token)
        .unwrap_or(&FLAVOR_PROFILES[0])
}

/// Mouthfeel of an origin's coffee.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Body {
    Light,
    Medium,
    Full,
}

impl Body {
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light Body",
            Self::Medium => "Medium Body",
            Self::Full => "Full Body",
        }
    }
}

/// A coffee-growing region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Origin {
    pub name: &'static str,
    pub flavors: &'static [&'static str],
    pub body: Body,
}

impl Origin {
    pub fn matches_any(&self, flavors: &[&str]) -> bool {
        self.flavors.iter().any(|f| flavors.contains(f))
    }
}

pub static ORIGINS: [Origin; 10] = [
    Origin {
        name: "Ethiopia Yirgacheffe",
        flavors: &["floral", "citrus", "fruity"],
        body: Body::Light,
    },
    Origin {
        name: "Kenya Nyeri",
        flavors: &["fruity", "citrus"],
        body: Body::Medium,
    },
    Origin {
        name: "Colombia Huila",
        flavors: &["caramel", "fruity", "chocolate"],
        body: Body::Medium,
    },
    Origin {
        name: "Brazil Cerrado",
        flavors: &["chocolate", "nutty"],
        body: Body::Full,
    },
    Origin {
        name: "Guatemala Antigua",
        flavors: &["chocolate", "spicy"],
        body: Body::Full,
    },
    Origin {
        name: "Sumatra Mandheling",
        flavors: &["earthy", "spicy"],
        body: Body::Full,
    },
    Origin {
        name: "Costa Rica Tarrazú",
        flavors: &["citrus", "caramel"],
        body: Body::Medium,
    },
    Origin {
        name: "Peru Cajamarca",
        flavors: &["nutty", "caramel", "floral"],
        body: Body::Medium,
    },
    Origin {
        name: "Honduras Marcala",
        flavors: &["caramel", "chocolate", "fruity"],
        body: Body::Medium,
    },
    Origin {
        name: "Papua New Guinea Sigri",
        flavors: &["earthy", "fruity", "floral"],
        body: Body::Medium,
    },
];

pub static BLEND_NAMES: [&str; 12] = [
    "Morning Ember",
    "Velvet Horizon",
    "Copper Canyon",
    "Midnight Harbor",
    "Golden Hour",
    "Wild Orchard",
    "Ember & Oak",
    "Sunrise Reserve",
    "Hearthstone",
    "Night Owl",
    "Atlas Roast",
    "Silk Road",
];

pub fn roast_level(roast: &str) -> &'static str {
    match roast {
        "light" => "Light Roast",
        "medium-dark" => "Medium-Dark Roast",
        "dark" => "Dark Roast",
        _ => "Medium Roast",
    }
}

pub fn grind_for(brew_method: &str) -> &'static str {
    match brew_method {
        "espresso" | "moka-pot" => "Fine",
        "pour-over" | "aeropress" => "Medium-Fine",
        "french-press" => "Coarse",
        "cold-brew" => "Extra Coarse",
        _ => "Medium",
    }
}

pub fn caffeine_level(caffeine: &str) -> &'static str {
    match caffeine {
        "half" => "Half Caff",
        "decaf" => "Decaf",
        _ => "Full Caffeine",
    }
}

pub fn drink_style_phrase(style: &str) -> &'static str {
    match style {
        "black" => "bold, unadorned",
        "with-milk" => "creamy, comforting",
        "sweet" => "dessert-like",
        "rich-chocolatey" => "rich, chocolate-forward",
        "smooth-nutty" => "smooth, nutty",
        "bright-fruity" => "bright, fruit-led",
        _ => "well-rounded",
    }
}

pub fn roast_phrase(roast: &str) -> &'static str {
    match roast {
        "light" => "a lively, tea-like brightness",
        "medium-dark" => "roasty depth with a caramelized edge",
        "dark" => "deep, smoky intensity",
        _ => "balanced sweetness and body",
    }
}

/// Finish descriptor for a bitterness value, in four buckets.
pub fn finish_for(bitterness: u8) -> &'static str {
    match bitterness {
        0 | 1 => "clean, sweet",
        2 => "soft, rounded",
        3 => "balanced",
        _ => "bold, lingering",
    }
}

/// Split given to the primary origin, in percent.
pub fn primary_share(roast: &str) -> u8 {
    match roast {
        "light" => 70,
        "dark" => 55,
        _ => 60,
    }
}
