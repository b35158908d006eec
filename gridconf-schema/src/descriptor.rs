//! Descriptor types for configuration bean classes and their fields.

/// How a configuration field's value is rendered by the generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Rendered from the value as-is (numbers, booleans, strings).
    Auto,
    /// Rendered with a float literal suffix.
    Float,
    /// Value is a variant of the given enum class.
    Enum { class: &'static str },
    /// Value is a database dialect resolved through
    /// [`DatabaseKind::jdbc_dialect_class`](crate::DatabaseKind::jdbc_dialect_class).
    JdbcDialect,
    /// Value is a property set emitted as a local variable with the given
    /// name before being assigned.
    PropertiesAsList { var_name: &'static str },
}

/// One settable field of a configuration bean class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name as it appears in the web client's configuration object.
    pub name: &'static str,
    pub kind: FieldKind,
    /// Overrides the setter name derived from `name`.
    pub setter: Option<&'static str>,
}

impl FieldDescriptor {
    pub const fn auto(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Auto,
            setter: None,
        }
    }

    pub const fn float(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Float,
            setter: None,
        }
    }

    pub const fn enumeration(name: &'static str, class: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Enum { class },
            setter: None,
        }
    }

    pub const fn jdbc_dialect(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::JdbcDialect,
            setter: None,
        }
    }

    pub const fn properties_as_list(name: &'static str, var_name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::PropertiesAsList { var_name },
            setter: None,
        }
    }

    /// Override the derived setter name.
    pub const fn with_setter(mut self, setter: &'static str) -> Self {
        self.setter = Some(setter);
        self
    }

    /// The Java setter invoked for this field: the explicit override when
    /// present, otherwise `set` + capitalized field name.
    pub fn setter_name(&self) -> String {
        let base = self.setter.unwrap_or(self.name);
        let mut chars = base.chars();

        match chars.next() {
            None => String::from("set"),
            Some(c) => format!("set{}{}", c.to_uppercase(), chars.as_str()),
        }
    }
}

/// A configuration bean class the generators can instantiate: its
/// fully-qualified name plus the schema of its settable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassDescriptor {
    pub class_name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl ClassDescriptor {
    /// Find a field descriptor by its configuration-object name.
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_setter_name() {
        assert_eq!(FieldDescriptor::auto("maxSize").setter_name(), "setMaxSize");
        assert_eq!(FieldDescriptor::auto("user").setter_name(), "setUser");
    }

    #[test]
    fn test_setter_override() {
        let field = FieldDescriptor::auto("transactionIsolation").with_setter("defaultTxIsolation");

        assert_eq!(field.setter_name(), "setDefaultTxIsolation");
    }

    #[test]
    fn test_field_lookup() {
        const DESCRIPTOR: ClassDescriptor = ClassDescriptor {
            class_name: "org.example.Bean",
            fields: &[FieldDescriptor::auto("maxSize")],
        };

        assert_eq!(DESCRIPTOR.field("maxSize").unwrap().name, "maxSize");
        assert!(DESCRIPTOR.field("missing").is_none());
    }
}
