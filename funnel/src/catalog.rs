//! Static mock content for the storefront.
//!
//! There is no backend: menus, reviews and copy blocks live here so the
//! renderer and the CLI share one source.

use crate::preference::PreferenceTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuCard {
    pub id: &'static str,
    pub image: &'static str,
    pub tag: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub minutes: u32,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Review {
    pub image: &'static str,
    pub text: &'static str,
    pub name: &'static str,
    pub date: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reason {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [&'static str],
}

/// One selectable chip on the tastes step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferenceOption {
    pub tag: &'static str,
    pub label: &'static str,
    pub blurb: &'static str,
}

impl PreferenceOption {
    pub fn preference_tag(&self) -> PreferenceTag {
        PreferenceTag::new(self.tag)
    }
}

pub const MENUS: [MenuCard; 4] = [
    MenuCard {
        id: "m1",
        image: "https://images.unsplash.com/photo-1631452180519-c014fe946bc0?auto=format&fit=crop&q=80&w=800",
        tag: "Calorie Smart",
        title: "Smoked Paneer Tikka Masala",
        subtitle: "with Cumin-Scented Basmati & Garlic Naan",
        minutes: 20,
        difficulty: Difficulty::Easy,
    },
    MenuCard {
        id: "m2",
        image: "https://images.unsplash.com/photo-1559847844-5315695dadae?auto=format&fit=crop&q=80&w=800",
        tag: "Premium Seafood",
        title: "Kerala Coconut Barramundi Curry",
        subtitle: "with Fragrant Jasmine Rice & Pickled Radish",
        minutes: 30,
        difficulty: Difficulty::Medium,
    },
    MenuCard {
        id: "m3",
        image: "https://images.unsplash.com/photo-1546833999-b9f581a1996d?auto=format&fit=crop&q=80&w=800",
        tag: "Vegetarian",
        title: "Slow-Cooked Black Dal Makhani",
        subtitle: "with Layered Whole Wheat Parathas",
        minutes: 25,
        difficulty: Difficulty::Easy,
    },
    MenuCard {
        id: "m4",
        image: "https://images.unsplash.com/photo-1563379091339-03b21ab4a4f8?auto=format&fit=crop&q=80&w=800",
        tag: "Weekend Special",
        title: "Hyderabadi Chicken Dum Biryani",
        subtitle: "with Mint Cucumber Raita & Salan",
        minutes: 45,
        difficulty: Difficulty::Hard,
    },
];

pub const REVIEWS: [Review; 4] = [
    Review {
        image: "https://images.unsplash.com/photo-1645696301019-35adcc18fc21?auto=format&fit=crop&q=80&w=600",
        text: "The exact spice blends make creating authentic Indian food so simple. Generous portions and incredible flavor profiles.",
        name: "Alisha R.",
        date: "2 days ago",
    },
    Review {
        image: "https://images.unsplash.com/photo-1596463059283-da2025e648be?auto=format&fit=crop&q=80&w=600",
        text: "I am amazed at the quality of the paneer and fresh vegetables. Way better than taking out, and it actually saves us money.",
        name: "David M.",
        date: "1 week ago",
    },
    Review {
        image: "https://plus.unsplash.com/premium_photo-1661600618035-7dcc137f8f90?auto=format&fit=crop&q=80&w=600",
        text: "Perfectly portioned ingredients mean I don't buy 8 whole spices just for one recipe. The Kerala Fish curry was a massive hit.",
        name: "Priya S.",
        date: "2 weeks ago",
    },
    Review {
        image: "https://images.unsplash.com/photo-1473093295043-cdd812d0e601?auto=format&fit=crop&q=80&w=600",
        text: "Healthy weeknight dinners have never been this easy. The Calorie Smart Indian menu is an absolute gamechanger.",
        name: "Sarah T.",
        date: "1 month ago",
    },
];

pub const REASONS: [Reason; 4] = [
    Reason {
        title: "No commitment whatsoever",
        description: "Skipping weeks or cancelling is super easy. Manage your account online anytime.",
    },
    Reason {
        title: "Authentic & Pre-portioned",
        description: "Fresh, high-quality ingredients, measured exactly for the recipe to eliminate food waste.",
    },
    Reason {
        title: "The most 5-star reviews",
        description: "Our meal kits deliver the most delicious recipes, created by top Indian chefs.",
    },
    Reason {
        title: "Fresh and affordable",
        description: "Cheaper than grocery shopping and way faster than takeout. Quality guaranteed.",
    },
];

pub const INSIDE_THE_BOX: [&str; 4] = [
    "Easy-to-follow recipe cards with exact visual instructions",
    "High-quality ingredients sourced straight from local Indian farms",
    "Convenient meal kits that fit perfectly in your fridge",
    "Cutting-edge cooling pouches to keep everything fresh during delivery",
];

pub const FOOTER_COLUMNS: [FooterColumn; 4] = [
    FooterColumn {
        title: "Discover",
        links: &["Students", "Blog", "Recipes", "Hero Discounts", "Recipe Directory", "Indian Classics"],
    },
    FooterColumn {
        title: "Our company",
        links: &["About GharFresh", "Sustainability", "Careers", "Press"],
    },
    FooterColumn {
        title: "Work with us",
        links: &["Partner", "Influencers", "Affiliates", "Corporate Sales"],
    },
    FooterColumn {
        title: "Help",
        links: &["Help Center & FAQ", "Delivery Options", "Return Policy", "Contact Support"],
    },
];

pub const PREFERENCE_OPTIONS: [PreferenceOption; 6] = [
    PreferenceOption {
        tag: "VEG",
        label: "Vegetarian",
        blurb: "Paneer, dal and seasonal sabzi",
    },
    PreferenceOption {
        tag: "CALORIE_SMART",
        label: "Calorie Smart",
        blurb: "Under 650 kcal per serving",
    },
    PreferenceOption {
        tag: "HIGH_PROTEIN",
        label: "High Protein",
        blurb: "30g+ protein per serving",
    },
    PreferenceOption {
        tag: "SEAFOOD",
        label: "Premium Seafood",
        blurb: "Coastal curries and grills",
    },
    PreferenceOption {
        tag: "QUICK",
        label: "Quick & Easy",
        blurb: "On the table in 20 minutes",
    },
    PreferenceOption {
        tag: "FAMILY",
        label: "Family Friendly",
        blurb: "Mild spice, kid-approved",
    },
];

pub const SUPPORT_PHONE: &str = "1-800-GHARFRESH";

/// Looks up the display label for a tag, if it is one of the offered options.
pub fn preference_label(tag: &PreferenceTag) -> Option<&'static str> {
    PREFERENCE_OPTIONS
        .iter()
        .find(|option| option.preference_tag() == *tag)
        .map(|option| option.label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn menu_ids_are_unique() {
        let ids: HashSet<_> = MENUS.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), MENUS.len());
    }

    #[test]
    fn preference_tags_are_normalized() {
        for option in PREFERENCE_OPTIONS {
            assert_eq!(option.preference_tag().as_str(), option.tag);
        }
    }

    #[test]
    fn preference_label_lookup() {
        assert_eq!(preference_label(&PreferenceTag::new("veg")), Some("Vegetarian"));
        assert_eq!(preference_label(&PreferenceTag::new("unknown")), None);
    }
}
