/// Ordered base types of a generated declaration.
///
/// The interface base always precedes the primary (implementation) base.
/// Interface declarations only ever carry an interface base.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseList {
    interface: Option<String>,
    primary: Option<String>,
}

impl BaseList {
    /// Bases of a concrete declaration.
    pub fn implementation(interface: Option<String>, primary: Option<String>) -> Self {
        Self { interface, primary }
    }

    /// Bases of an interface declaration.
    pub fn interface(base: Option<String>) -> Self {
        Self {
            interface: base,
            primary: None,
        }
    }

    /// Base names in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.interface.iter().chain(self.primary.iter()).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.interface.is_none() && self.primary.is_none()
    }

    /// Join the bases, each prefixed with `qualifier`; empty when there are none.
    pub fn join(&self, qualifier: &str, separator: &str) -> String {
        self.iter()
            .map(|base| format!("{qualifier}{base}"))
            .collect::<Vec<_>>()
            .join(separator)
    }
}
