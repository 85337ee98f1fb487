//! Card Catalog
//!
//! Static table of known cards plus the reward-type grouping used by the
//! selection list. Card names are the sole identifier everywhere: in
//! persistence and in requests to the decision service.

/// Reward classification, used only for UI grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardGroup {
    Miles,
    Cashback,
}

/// Static card metadata compiled into the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardMeta {
    pub name: &'static str,
    pub issuer: &'static str,
    pub group: RewardGroup,
    pub note: &'static str,
}

/// All known cards, miles cards first
pub const CATALOG: &[CardMeta] = &[
    CardMeta {
        name: "DBS Altitude Visa",
        issuer: "DBS",
        group: RewardGroup::Miles,
        note: "General miles card. 1.3 mpd local, ~2.0 mpd FCY. Good for uncapped general spend.",
    },
    CardMeta {
        name: "DBS Woman's World Mastercard",
        issuer: "DBS",
        group: RewardGroup::Miles,
        note: "4 mpd on online SGD spend up to S$1k/month. FCY online earns base miles only.",
    },
    CardMeta {
        name: "Citi Rewards",
        issuer: "Citi",
        group: RewardGroup::Miles,
        note: "4 mpd on online shopping and fashion up to S$1k/month. No bonus on travel / mobile wallet.",
    },
    CardMeta {
        name: "Citi PremierMiles",
        issuer: "Citi",
        group: RewardGroup::Miles,
        note: "General travel miles card. 1.2 mpd local, ~2.0 mpd FCY, higher for airlines/hotels promos.",
    },
    CardMeta {
        name: "UOB PRVI Miles Visa",
        issuer: "UOB",
        group: RewardGroup::Miles,
        note: "1.4 mpd local, ~2.4 mpd FCY, ~3 mpd for selected online travel (Agoda/Expedia).",
    },
    CardMeta {
        name: "OCBC 90N Visa",
        issuer: "OCBC",
        group: RewardGroup::Miles,
        note: "1.3 mpd local, ~2.1 mpd FCY. Simple uncapped miles card.",
    },
    // HSBC Revolution earns points; grouped with cashback in the UI
    CardMeta {
        name: "HSBC Revolution",
        issuer: "HSBC",
        group: RewardGroup::Cashback,
        note: "Up to 10x points (~4 mpd) on online and contactless dining/shopping/travel. No FCY bonus.",
    },
    CardMeta {
        name: "UOB EVOL",
        issuer: "UOB",
        group: RewardGroup::Cashback,
        note: "Cashback card for online + contactless. Needs min spend and 3 txns to unlock boost.",
    },
    CardMeta {
        name: "OCBC 365",
        issuer: "OCBC",
        group: RewardGroup::Cashback,
        note: "Cashback across dining, groceries, fuel, etc. Tiered caps and min spend.",
    },
    CardMeta {
        name: "Maybank Family & Friends",
        issuer: "Maybank",
        group: RewardGroup::Cashback,
        note: "High cashback on chosen categories (e.g. groceries, dining, transport) with caps.",
    },
];

/// Group heading shown above each section of the selection list
fn group_title(group: RewardGroup) -> &'static str {
    match group {
        RewardGroup::Miles => "Miles cards",
        RewardGroup::Cashback => "Cashback / points cards",
    }
}

/// Split a catalog into (title, cards) sections by reward group.
///
/// Declaration order is preserved within each section; a group with no
/// members produces no section at all (no empty headings).
pub fn group_by_reward_type(catalog: &'static [CardMeta]) -> Vec<(&'static str, Vec<&'static CardMeta>)> {
    [RewardGroup::Miles, RewardGroup::Cashback]
        .into_iter()
        .filter_map(|group| {
            let members: Vec<&CardMeta> = catalog.iter().filter(|c| c.group == group).collect();
            if members.is_empty() {
                None
            } else {
                Some((group_title(group), members))
            }
        })
        .collect()
}

/// Look up a card by its unique name
pub fn find(name: &str) -> Option<&'static CardMeta> {
    CATALOG.iter().find(|c| c.name == name)
}

/// Every catalog name, in declaration order
pub fn all_names() -> Vec<String> {
    CATALOG.iter().map(|c| c.name.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<&str> = CATALOG.iter().map(|c| c.name).collect();
        assert_eq!(names.len(), CATALOG.len());
    }

    #[test]
    fn test_grouping_preserves_declaration_order() {
        let groups = group_by_reward_type(CATALOG);
        assert_eq!(groups.len(), 2);

        let (miles_title, miles) = &groups[0];
        assert_eq!(*miles_title, "Miles cards");
        assert_eq!(miles[0].name, "DBS Altitude Visa");
        assert_eq!(miles.last().unwrap().name, "OCBC 90N Visa");

        let (cashback_title, cashback) = &groups[1];
        assert_eq!(*cashback_title, "Cashback / points cards");
        assert_eq!(cashback[0].name, "HSBC Revolution");

        // every card appears in exactly one group
        assert_eq!(miles.len() + cashback.len(), CATALOG.len());
    }

    #[test]
    fn test_empty_group_is_omitted() {
        const MILES_ONLY: &[CardMeta] = &[CardMeta {
            name: "Test Miles",
            issuer: "Test",
            group: RewardGroup::Miles,
            note: "",
        }];

        let groups = group_by_reward_type(MILES_ONLY);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, "Miles cards");
    }

    #[test]
    fn test_find() {
        assert_eq!(find("UOB EVOL").unwrap().issuer, "UOB");
        assert!(find("No Such Card").is_none());
    }
}
