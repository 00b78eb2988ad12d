use serde::{Deserialize, Serialize};

// -----------------------------------------------------------------------------
// SerializationPolicy

/// How a serializer should treat a member.
///
/// This crate only carries the value; the meaning of each variant belongs
/// to the serializer reading it.
///
/// Names (de)serialize in lowercase.
///
/// # Examples
///
/// ```
/// use ya_reflect::info::SerializationPolicy;
///
/// let text = serde_json::to_string(&SerializationPolicy::Content).unwrap();
/// assert_eq!(text, "\"content\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SerializationPolicy {
    /// Never serialize the member.
    Never,
    /// Serialize the member and assign it on load.
    Assign,
    /// Serialize the content of the member into the existing instance.
    Content,
    /// Serialize the member as raw binary.
    Binary,
}

impl SerializationPolicy {
    /// All variants, in declaration order.
    pub const ALL: [Self; 4] = [Self::Never, Self::Assign, Self::Content, Self::Binary];

    /// Returns the lowercase name of the variant.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Never => "never",
            Self::Assign => "assign",
            Self::Content => "content",
            Self::Binary => "binary",
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::SerializationPolicy;

    #[test]
    fn serde_names_match_name() {
        for policy in SerializationPolicy::ALL {
            let text = serde_json::to_string(&policy).unwrap();
            assert_eq!(text, alloc::format!("\"{}\"", policy.name()));

            let back: SerializationPolicy = serde_json::from_str(&text).unwrap();
            assert_eq!(back, policy);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!(serde_json::from_str::<SerializationPolicy>("\"Assign\"").is_err());
        assert!(serde_json::from_str::<SerializationPolicy>("\"copy\"").is_err());
    }
}
