use ahash::AHashMap;

/// Inputs available to the pattern rules, borrowed from the analyzer's pass.
pub(crate) struct PatternContext<'a> {
    pub node_kinds: &'a AHashMap<String, usize>,
    pub categories: &'a AHashMap<String, usize>,
    pub node_count: usize,
    pub edge_count: usize,
}

impl PatternContext<'_> {
    fn any_kind_contains(&self, needle: &str) -> bool {
        self.node_kinds.keys().any(|kind| kind.contains(needle))
    }

    fn any_category_contains(&self, needle: &str) -> bool {
        self.categories
            .keys()
            .any(|category| category.to_lowercase().contains(needle))
    }
}

type PatternRule = (&'static str, fn(&PatternContext) -> bool);

/// Ordered tag rules. Tags co-occur freely; none excludes another.
const PATTERN_RULES: &[PatternRule] = &[
    ("custom-node-based", custom_node_based),
    ("chat-flow", chat_flow),
    ("agent-based", agent_based),
    ("with-memory", with_memory),
    ("with-tools", with_tools),
    ("highly-connected", highly_connected),
];

fn custom_node_based(ctx: &PatternContext) -> bool {
    ctx.any_kind_contains("customNode")
}

fn chat_flow(ctx: &PatternContext) -> bool {
    ctx.any_kind_contains("chatInput") && ctx.any_kind_contains("chatOutput")
}

fn agent_based(ctx: &PatternContext) -> bool {
    ctx.any_category_contains("agent")
}

fn with_memory(ctx: &PatternContext) -> bool {
    ctx.any_category_contains("memory")
}

fn with_tools(ctx: &PatternContext) -> bool {
    ctx.any_category_contains("tool")
}

fn highly_connected(ctx: &PatternContext) -> bool {
    ctx.edge_count > ctx.node_count
}

/// Evaluates every rule against the context, in table order.
pub(crate) fn detect(ctx: &PatternContext) -> Vec<String> {
    PATTERN_RULES
        .iter()
        .filter(|(_, rule)| rule(ctx))
        .map(|(tag, _)| (*tag).to_string())
        .collect()
}
