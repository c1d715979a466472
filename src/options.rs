//! Table configuration options.

/// Names computer players are seated under.
pub const BOT_NAMES: [&str; 11] = [
    "Izzy",
    "Miles",
    "Milan",
    "Justin",
    "Warat",
    "Daniel",
    "Kai",
    "Shri",
    "Professor Allison",
    "Gabe Newell",
    "Donald Bren",
];

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::TableOptions;
///
/// let options = TableOptions::default()
///     .with_stand_above(16)
///     .with_max_bots(3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Bots and the House stand once their true value is above this.
    pub stand_above: u8,
    /// Maximum number of computer players besides the House.
    pub max_bots: u8,
    /// Pool bot names are drawn from.
    pub bot_names: Vec<String>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            stand_above: 15,
            max_bots: 5,
            bot_names: BOT_NAMES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl TableOptions {
    /// Sets the value bots and the House stand above.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_stand_above(16);
    /// assert_eq!(options.stand_above, 16);
    /// ```
    #[must_use]
    pub const fn with_stand_above(mut self, value: u8) -> Self {
        self.stand_above = value;
        self
    }

    /// Sets the maximum number of computer players.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_max_bots(2);
    /// assert_eq!(options.max_bots, 2);
    /// ```
    #[must_use]
    pub const fn with_max_bots(mut self, max: u8) -> Self {
        self.max_bots = max;
        self
    }

    /// Replaces the bot name pool.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_bot_names(["Ann", "Bo"]);
    /// assert_eq!(options.bot_names, vec!["Ann".to_string(), "Bo".to_string()]);
    /// ```
    #[must_use]
    pub fn with_bot_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bot_names = names.into_iter().map(Into::into).collect();
        self
    }
}
