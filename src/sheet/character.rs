//! Static flavor data for the character sheet. Values and tooltip copy are
//! content, not logic; edit freely.

pub const SHEET_TITLE: &str = "PM Character Portfolio";
pub const SHEET_SUBTITLE: &str = "Project Management Skills \u{2022} RPG Style";
pub const CURRENT_LOCATION: &str = "Trials of Fire";

#[derive(Clone, Copy, Debug)]
pub struct DetailEntry {
    pub label: &'static str,
    pub value: &'static str,
    pub tooltip: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Perk {
    pub name: &'static str,
    pub description: &'static str,
}

const CLASS_TOOLTIP: &str = "The Fog-Piercer \u{2014} Resolve, Perception, Insight";

const HOUSE_TOOLTIP: &str = "\"I pledge my technical insight to the service of the Sovereign \
User, for the system exists only to empower the human. I pledge to be the shield that guards \
against the 'Magic' of false promises and the sword that cuts through the fog.\"";

pub const DETAILS: &[DetailEntry] = &[
    DetailEntry {
        label: "Class",
        value: "Tech Paladin",
        tooltip: CLASS_TOOLTIP,
    },
    DetailEntry {
        label: "House",
        value: "Customer",
        tooltip: HOUSE_TOOLTIP,
    },
];

pub const SIGNATURE_MOVE: Perk = Perk {
    name: "Dispel Ambiguity",
    description: "An AOE (Area of Effect) spell that instantly converts \"I think we need...\" \
        into a Jira ticket with clear Acceptance Criteria.",
};

pub const PASSIVE_PERKS: &[Perk] = &[
    Perk {
        name: "True Sight",
        description: "You see the hidden technical constraints that stakeholders usually miss.",
    },
    Perk {
        name: "Elegant Prose",
        description: "Your documentation provides a +5 Buff to Engineer Morale.",
    },
    Perk {
        name: "Aura of Alignment",
        description: "Passively ensures that every technical discussion eventually circles back \
            to the user's core problem. It automatically reduces the \"Scope Creep\" damage taken \
            by the engineering team by 40% by filtering out features that don't serve the \
            Sovereign User.",
    },
];

pub const BONUS_TRAIT: Perk = Perk {
    name: "The Common Tongue (Communication)",
    description: "You translate the \"Common Language\" of the customer, into the \"High Prose\" \
        of the engineering team and vice-versa.",
};
