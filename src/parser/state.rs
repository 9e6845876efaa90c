//! Section state machine for the markup renderer.

/// Where the renderer is in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// Ordinary content
    #[default]
    Default,
    /// Inside the employment history section, gathering job blocks
    InEmploymentBlock,
    /// Gathering table rows; remembers the section to return to
    InTable {
        /// Whether the table sits inside the employment history section
        in_employment: bool,
    },
}

/// Inputs that drive state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Level-2 heading naming the employment history section
    EmploymentHeading,
    /// Any other heading
    OtherHeading,
    /// A table row that is followed by another table row
    TableRow,
    /// The last row of a table run
    TableEnd,
    /// Rules, blank lines and text
    Other,
}

impl State {
    /// Transition table.
    pub fn next(self, input: Input) -> State {
        match (self, input) {
            (_, Input::EmploymentHeading) => State::InEmploymentBlock,
            (_, Input::OtherHeading) => State::Default,

            (State::Default, Input::TableRow) => State::InTable {
                in_employment: false,
            },
            (State::InEmploymentBlock, Input::TableRow) => State::InTable {
                in_employment: true,
            },
            (State::InTable { .. }, Input::TableRow) => self,

            (State::InTable { in_employment }, Input::TableEnd | Input::Other) => {
                section(in_employment)
            }
            (State::Default | State::InEmploymentBlock, Input::TableEnd | Input::Other) => self,
        }
    }

    /// Check whether text lines belong to a job block.
    pub fn in_employment(self) -> bool {
        matches!(
            self,
            State::InEmploymentBlock
                | State::InTable {
                    in_employment: true
                }
        )
    }

    /// Check whether a table run is open.
    pub fn in_table(self) -> bool {
        matches!(self, State::InTable { .. })
    }
}

fn section(in_employment: bool) -> State {
    if in_employment {
        State::InEmploymentBlock
    } else {
        State::Default
    }
}
