use crate::graph::InputKind;
use ahash::AHashMap;

/// Where a resolved outgoing edge attaches on the compiled node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortBinding {
    /// The continuation slot of the option at this index.
    OptionSlot(usize),
    /// The node's single bare continuation.
    Direct,
}

/// Defines how one `InputKind` maps builder port keys onto compiled
/// continuation slots. The per-kind port semantics are the one genuinely
/// type-specific piece of the compilation; putting them behind a registry
/// keeps the compile loop free of kind conditionals.
pub trait PortResolver: Send + Sync {
    fn input_kind(&self) -> InputKind;

    /// Resolves a port key against a node carrying `option_count` options.
    /// `None` means the key addresses no live port and the edge is dropped.
    fn resolve(&self, port_key: &str, option_count: usize) -> Option<PortBinding>;
}

/// `out_opt_<index>` ports, one per answer option.
///
/// Port keys carry the option's position at the time the edge was drawn;
/// reordering options afterwards re-routes edges silently.
struct ChoicePortResolver;

impl PortResolver for ChoicePortResolver {
    fn input_kind(&self) -> InputKind {
        InputKind::MultipleChoice
    }

    fn resolve(&self, port_key: &str, option_count: usize) -> Option<PortBinding> {
        let index: usize = port_key.strip_prefix("out_opt_")?.parse().ok()?;
        if index < option_count {
            Some(PortBinding::OptionSlot(index))
        } else {
            None
        }
    }
}

/// `out_yes`/`out_no` ports mapping onto the fixed Yes/No option pair.
struct YesNoPortResolver;

impl PortResolver for YesNoPortResolver {
    fn input_kind(&self) -> InputKind {
        InputKind::YesNo
    }

    fn resolve(&self, port_key: &str, _option_count: usize) -> Option<PortBinding> {
        match port_key {
            "out_yes" => Some(PortBinding::OptionSlot(0)),
            "out_no" => Some(PortBinding::OptionSlot(1)),
            _ => None,
        }
    }
}

/// Single-output kinds: any port key resolves to the bare continuation.
struct SingleOutputResolver(InputKind);

impl PortResolver for SingleOutputResolver {
    fn input_kind(&self) -> InputKind {
        self.0
    }

    fn resolve(&self, _port_key: &str, _option_count: usize) -> Option<PortBinding> {
        Some(PortBinding::Direct)
    }
}

pub(super) fn register_default_resolvers(registry: &mut AHashMap<InputKind, Box<dyn PortResolver>>) {
    let resolvers: Vec<Box<dyn PortResolver>> = vec![
        Box::new(ChoicePortResolver),
        Box::new(YesNoPortResolver),
        Box::new(SingleOutputResolver(InputKind::Number)),
        Box::new(SingleOutputResolver(InputKind::TextArea)),
        Box::new(SingleOutputResolver(InputKind::FileUpload)),
    ];
    for resolver in resolvers {
        registry.insert(resolver.input_kind(), resolver);
    }
}
