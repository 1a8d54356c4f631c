//! Static help listing.

/// One entry of the help listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HelpTopic {
    /// Short heading.
    pub title: &'static str,
    /// Invocation forms.
    pub usage: &'static str,
    /// What the command does.
    pub summary: &'static str,
    /// A worked example.
    pub example: &'static str,
}

const TOPICS: &[HelpTopic] = &[
    HelpTopic {
        title: "Value",
        usage: "value <item name> | v <item name>",
        summary: "Show the demand, value, and rate of change of an item.",
        example: "value Frost Aura",
    },
    HelpTopic {
        title: "Top Items",
        usage: "top [count] [demand|value]",
        summary: "List the highest-ranked items by demand or value.",
        example: "top 5 demand",
    },
    HelpTopic {
        title: "Filter Items",
        usage: "filter <condition>",
        summary: "Find items whose demand, value, or rate_of_change match a condition.",
        example: "filter demand > 8 and value >= 100",
    },
    HelpTopic {
        title: "Compare Items",
        usage: "compare <item> vs <item>",
        summary: "Compare two items side by side.",
        example: "compare Frost Aura vs Festival Aura",
    },
    HelpTopic {
        title: "Compare Trade",
        usage: "compare <items> <separator> <items>",
        summary: "Total both sides of a trade and say who is overpaying.",
        example: "compare Frost Aura x1 <:for:1310746627572633664> Festival Aura x2",
    },
    HelpTopic {
        title: "Recent Updates",
        usage: "recent [count]",
        summary: "List items with the highest rate of change.",
        example: "recent 5",
    },
    HelpTopic {
        title: "Help",
        usage: "help",
        summary: "Show this help message.",
        example: "help",
    },
];

/// Returns the help listing, one topic per command form.
#[must_use]
pub fn help_topics() -> &'static [HelpTopic] {
    TOPICS
}
