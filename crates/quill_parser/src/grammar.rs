//! Command grammars.
//!
//! Each command keyword has one grammar: an ordered list of elements that is
//! compiled once into an anchored, case-insensitive regex.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Direction marker for a cursor pointing forward.
pub const FORWARD: &str = "->";

/// Direction marker for a cursor pointing backward.
pub const BACKWARD: &str = "<-";

/// One element of a command grammar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Element {
    /// A literal word that must appear (case-insensitive)
    Literal(&'static str),
    /// Any run of non-space characters
    Word,
    /// A run of digits
    Number,
    /// A number or a word
    WordOrNumber,
    /// One of the two direction markers
    Direction,
    /// The rest of the line
    FreeText,
    /// Zero or one occurrence of the inner element
    Optional(Box<Element>),
}

impl Element {
    /// Wraps an element as optional.
    #[must_use]
    pub fn optional(inner: Element) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// Regex fragment for this element. Placeholders carry one capture group.
    ///
    /// Literals fold ASCII case only and numbers are ASCII digits, the same
    /// rules [`Element::accepts`] applies.
    #[must_use]
    pub fn fragment(&self) -> String {
        match self {
            Self::Literal(word) => format!("(?-u:{})", regex::escape(word)),
            Self::Word => r"(\S+)".to_string(),
            Self::Number => "([0-9]+)".to_string(),
            Self::WordOrNumber => r"([0-9]+|\S+)".to_string(),
            Self::Direction => format!("({}|{})", regex::escape(BACKWARD), regex::escape(FORWARD)),
            Self::FreeText => "(.+)".to_string(),
            Self::Optional(inner) => format!("(?:{})?", inner.fragment()),
        }
    }

    /// Human-readable name used in diagnostics.
    #[must_use]
    pub fn category(&self) -> String {
        match self {
            Self::Literal(word) => (*word).to_string(),
            Self::Word => "word".to_string(),
            Self::Number => "number".to_string(),
            Self::WordOrNumber => "word or number".to_string(),
            Self::Direction => "direction".to_string(),
            Self::FreeText => "text".to_string(),
            Self::Optional(inner) => inner.category(),
        }
    }

    /// Checks whether a single word satisfies this element.
    #[must_use]
    pub fn accepts(&self, token: &str) -> bool {
        match self {
            Self::Literal(word) => token.eq_ignore_ascii_case(word),
            Self::Word => !token.is_empty() && !token.chars().any(char::is_whitespace),
            Self::Number => !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()),
            Self::WordOrNumber | Self::FreeText => !token.is_empty(),
            Self::Direction => token == FORWARD || token == BACKWARD,
            Self::Optional(inner) => inner.accepts(token),
        }
    }

    /// Returns true for optional elements.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }

    /// Returns true if this element swallows every remaining word.
    #[must_use]
    pub fn absorbs_rest(&self) -> bool {
        match self {
            Self::FreeText => true,
            Self::Optional(inner) => inner.absorbs_rest(),
            _ => false,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(word) => f.write_str(word),
            Self::Optional(inner) => write!(f, "[{inner}]"),
            other => write!(f, "<{}>", other.category()),
        }
    }
}

/// The command a grammar describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// Create or replace a text
    Input,
    /// Reflow a text around separators
    Format,
    /// Place a cursor in a text
    Cursor,
    /// Append one text to another
    Send,
    /// Print one or all texts
    Print,
    /// Stop processing lines
    End,
}

impl CommandKind {
    /// Grammar name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Input => "Input",
            Self::Format => "Format",
            Self::Cursor => "Cursor",
            Self::Send => "Send",
            Self::Print => "Print",
            Self::End => "End",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A compiled command grammar.
#[derive(Clone, Debug)]
pub struct Grammar {
    kind: CommandKind,
    elements: Vec<Element>,
    regex: Regex,
}

impl Grammar {
    /// Compiles a grammar from its elements.
    ///
    /// # Errors
    ///
    /// Returns an error if the generated pattern is not a valid regex.
    pub fn compile(kind: CommandKind, elements: Vec<Element>) -> Result<Self, regex::Error> {
        let regex = Regex::new(&Self::pattern(&elements))?;
        Ok(Self {
            kind,
            elements,
            regex,
        })
    }

    /// Builds the anchored pattern. Optional elements carry their own
    /// leading space so an absent element leaves no trailing blank.
    fn pattern(elements: &[Element]) -> String {
        let mut pattern = String::from("(?i)^");
        for (i, element) in elements.iter().enumerate() {
            match element {
                Element::Optional(inner) => {
                    pattern.push_str(&format!("(?: {})?", inner.fragment()));
                }
                _ => {
                    if i > 0 {
                        pattern.push(' ');
                    }
                    pattern.push_str(&element.fragment());
                }
            }
        }
        pattern.push('$');
        pattern
    }

    /// The command this grammar describes.
    #[must_use]
    pub const fn kind(&self) -> CommandKind {
        self.kind
    }

    /// Grammar name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Grammar elements in order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// The compiled full-line regex.
    #[must_use]
    pub const fn regex(&self) -> &Regex {
        &self.regex
    }

    /// The leading keyword, if the grammar starts with a literal.
    #[must_use]
    pub fn keyword(&self) -> Option<&'static str> {
        match self.elements.first() {
            Some(Element::Literal(word)) => Some(*word),
            _ => None,
        }
    }

    /// Usage line, e.g. `print [<word>]`.
    #[must_use]
    pub fn usage(&self) -> String {
        self.elements
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

static BUILTIN: LazyLock<GrammarRegistry> = LazyLock::new(|| {
    let entries = vec![
        (
            CommandKind::Input,
            vec![
                Element::Literal("input"),
                Element::Word,
                Element::optional(Element::FreeText),
            ],
        ),
        (
            CommandKind::Format,
            vec![
                Element::Literal("format"),
                Element::Word,
                Element::optional(Element::Word),
            ],
        ),
        (
            CommandKind::Cursor,
            vec![
                Element::Literal("cursor"),
                Element::Word,
                Element::Word,
                Element::WordOrNumber,
                Element::Direction,
                Element::WordOrNumber,
            ],
        ),
        (
            CommandKind::Send,
            vec![Element::Literal("send"), Element::Word, Element::Word],
        ),
        (
            CommandKind::Print,
            vec![Element::Literal("print"), Element::optional(Element::Word)],
        ),
        (CommandKind::End, vec![Element::Literal("quit")]),
    ];

    let grammars = entries
        .into_iter()
        .map(|(kind, elements)| {
            Grammar::compile(kind, elements).expect("built-in grammar must compile")
        })
        .collect();
    GrammarRegistry::new(grammars)
});

/// Ordered collection of grammars. Order is matching priority.
#[derive(Clone, Debug, Default)]
pub struct GrammarRegistry {
    grammars: Vec<Grammar>,
}

impl GrammarRegistry {
    /// Creates a registry from grammars in priority order.
    #[must_use]
    pub fn new(grammars: Vec<Grammar>) -> Self {
        Self { grammars }
    }

    /// The built-in command set, compiled on first use.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Iterates grammars in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &Grammar> {
        self.grammars.iter()
    }

    /// Number of registered grammars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.grammars.len()
    }

    /// Returns true if no grammars are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grammars.is_empty()
    }

    /// Gets the grammar for a command kind.
    #[must_use]
    pub fn get(&self, kind: CommandKind) -> Option<&Grammar> {
        self.grammars.iter().find(|g| g.kind == kind)
    }

    /// Finds the first grammar whose keyword equals `word` (case-insensitive).
    #[must_use]
    pub fn select(&self, word: &str) -> Option<&Grammar> {
        self.grammars
            .iter()
            .find(|g| g.keyword().is_some_and(|k| k.eq_ignore_ascii_case(word)))
    }

    /// All leading keywords in priority order.
    #[must_use]
    pub fn keywords(&self) -> Vec<&'static str> {
        self.grammars.iter().filter_map(Grammar::keyword).collect()
    }
}
