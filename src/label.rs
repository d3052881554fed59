use std::borrow::Cow;

use crate::{Error, Result};

/// What to do with labels containing newlines or other control characters.
///
/// Such characters would break a label over multiple lines or move the cursor and corrupt unrelated rows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LabelPolicy {
    /// Fail with [`Error::InvalidLabel`].
    #[default]
    Reject,
    /// Replace them with their escape sequence like `\n` or `\u{1b}`.
    Escape,
}

impl LabelPolicy {
    /// Check `label` against this policy.
    ///
    /// # Errors
    ///
    /// Errors with [`Error::InvalidLabel`] when rejecting a label containing a control character.
    pub fn apply(self, label: &str) -> Result<Cow<'_, str>> {
        let Some(character) = label.chars().find(|c| c.is_control()) else {
            return Ok(Cow::Borrowed(label));
        };
        match self {
            Self::Reject => Err(Error::InvalidLabel {
                label: label.to_owned(),
                character,
            }),
            Self::Escape => {
                let mut escaped = String::with_capacity(label.len() + 4);
                for c in label.chars() {
                    if c.is_control() {
                        escaped.extend(c.escape_default());
                    } else {
                        escaped.push(c);
                    }
                }
                Ok(Cow::Owned(escaped))
            }
        }
    }
}

#[test]
fn plain_label_is_borrowed() {
    let label = LabelPolicy::Reject.apply("Alfa Bravo").unwrap();
    assert!(matches!(label, Cow::Borrowed("Alfa Bravo")));
}

#[test]
fn non_ascii_is_not_a_control_character() {
    let label = LabelPolicy::Escape.apply("Grüße 木").unwrap();
    assert_eq!(label, "Grüße 木");
}

#[test]
fn reject_names_the_character() {
    let error = LabelPolicy::Reject.apply("two\nlines").unwrap_err();
    assert!(matches!(
        error,
        Error::InvalidLabel { ref label, character: '\n' } if label == "two\nlines"
    ));
}

#[test]
fn escape_replaces_control_characters() {
    let label = LabelPolicy::Escape.apply("a\tb\nc\u{1b}").unwrap();
    assert_eq!(label, "a\\tb\\nc\\u{1b}");
}
