use crate::token::GraphQLKeyword;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use indexmap::IndexMap;

/// Grammatical position relative to a variable definition or usage.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum VariableDefinitionState {
    Idle,
    /// Just after `$`.
    Sigil,
    /// On the variable's name (`$id`).
    Name,
    /// After the `:` of a variable definition, possibly inside `[`.
    Colon,
    /// On (or just after) the declared type (`$id: ID!`).
    TypeName,
}

/// Follows the variable definition list of the current operation and
/// remembers every variable declared in it, along with its declared type as
/// written (`[ID!]!`).
///
/// Outside the definition list, `$name` still moves the tracker through
/// [`Sigil`](VariableDefinitionState::Sigil) and
/// [`Name`](VariableDefinitionState::Name) so that variable *usages* can be
/// completed once [`ended()`](Self::ended) is set.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinitionTracker {
    /// An operation keyword (and maybe its name) was just seen, so a `(`
    /// opens the definition list.
    armed: bool,
    depth: usize,
    ended: bool,
    in_definitions: bool,
    pending_name: Option<String>,
    pending_type: String,
    state: VariableDefinitionState,
    variables: IndexMap<String, String>,
}

impl VariableDefinitionTracker {
    pub fn new() -> Self {
        Self {
            armed: false,
            depth: 0,
            ended: false,
            in_definitions: false,
            pending_name: None,
            pending_type: String::new(),
            state: VariableDefinitionState::Idle,
            variables: IndexMap::new(),
        }
    }

    pub fn consume(mut self, token: &GraphQLToken<'_>) -> Self {
        use VariableDefinitionState as State;

        if token.kind.is_inert() {
            return self;
        }

        if self.in_definitions && token.is_preceded_by_comma() {
            self.state = State::Idle;
        }

        match (&token.kind, self.state) {
            (GraphQLTokenKind::Name(name), State::Sigil) => {
                self.pending_name = Some(name.to_string());
                self.state = State::Name;
            },

            (GraphQLTokenKind::Name(name), _)
                if self.depth == 0
                    && !self.in_definitions
                    && GraphQLKeyword::from_name(name)
                        .is_some_and(|kw| kw.is_operation_type()) => {
                self.armed = true;
                self.ended = false;
                self.pending_name = None;
                self.state = State::Idle;
                self.variables.clear();
            },

            (GraphQLTokenKind::Name(name), State::Colon) if self.in_definitions => {
                self.pending_type.push_str(name);
                self.record_pending_variable();
                self.state = State::TypeName;
            },

            (GraphQLTokenKind::Name(_), State::Idle) if self.armed => {
                // The operation's name.
            },

            (GraphQLTokenKind::Dollar, _) => {
                self.armed = false;
                self.state = State::Sigil;
            },

            (GraphQLTokenKind::Colon, State::Name) if self.in_definitions => {
                self.pending_type.clear();
                self.state = State::Colon;
            },

            (GraphQLTokenKind::SquareBracketOpen, State::Colon) if self.in_definitions => {
                self.pending_type.push('[');
            },

            (GraphQLTokenKind::Bang, State::TypeName)
                | (GraphQLTokenKind::SquareBracketClose, State::TypeName)
                if self.in_definitions => {
                self.pending_type.push_str(token.text());
                self.record_pending_variable();
            },

            (GraphQLTokenKind::ParenOpen, _)
                if self.armed && self.depth == 0 && !self.in_definitions => {
                self.armed = false;
                self.in_definitions = true;
                self.state = State::Idle;
            },

            (GraphQLTokenKind::ParenClose, _) if self.in_definitions => {
                self.ended = true;
                self.in_definitions = false;
                self.state = State::Idle;
            },

            (GraphQLTokenKind::CurlyBraceOpen, _) if !self.in_definitions => {
                self.armed = false;
                self.depth += 1;
                if self.depth == 1 {
                    self.ended = true;
                }
                self.state = State::Idle;
            },

            (GraphQLTokenKind::CurlyBraceClose, _) if !self.in_definitions => {
                self.depth = self.depth.saturating_sub(1);
                self.state = State::Idle;
            },

            (_, _) => {
                self.armed = false;
                self.state = State::Idle;
            },
        }

        self
    }

    /// Names of the variables declared by the current operation, in
    /// declaration order.
    pub fn defined_variables(&self) -> Vec<&str> {
        self.variables.keys().map(|name| name.as_str()).collect()
    }

    /// Declared type text keyed by variable name. Redeclaring a variable
    /// overwrites its type but keeps its original position.
    pub fn defined_variable_types(&self) -> &IndexMap<String, String> {
        &self.variables
    }

    /// `true` once the current operation's definition list is closed (or its
    /// body was opened without one).
    pub fn ended(&self) -> bool {
        self.ended
    }

    /// `true` while between the `(` and `)` of a variable definition list.
    pub fn in_definitions(&self) -> bool {
        self.in_definitions
    }

    pub fn state(&self) -> VariableDefinitionState {
        self.state
    }

    fn record_pending_variable(&mut self) {
        if let Some(name) = &self.pending_name {
            self.variables.insert(name.to_owned(), self.pending_type.to_owned());
        }
    }
}

impl Default for VariableDefinitionTracker {
    fn default() -> Self {
        Self::new()
    }
}
