/// A named operation and its arguments, as delivered by the platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The operation name
    pub function: String,
    /// The operation's arguments, in order
    pub args: Vec<String>,
}

impl Invocation {
    /// Build an invocation of `function` with `args`
    pub fn new<I, S>(function: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            function: function.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

