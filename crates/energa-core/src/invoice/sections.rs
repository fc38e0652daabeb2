//! Section classification of statement lines.
//!
//! A statement reads top to bottom as meter readings, sales settlement,
//! distribution settlement and finally the energy (deposit) balance. The
//! classifier is a monotonic state machine over those four sections.

use super::rules::patterns::{DISTRIBUTION_SETTLEMENT, ENERGY_SETTLEMENT, SALES_SETTLEMENT};

/// Logical region of a statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    /// Meter readings (dane odczytowe).
    #[default]
    Reading,
    /// Energy sales settlement.
    Sales,
    /// Distribution fees settlement.
    Distribution,
    /// Net-metering deposit balance.
    Balance,
}

/// Section triggers in priority order.
const TRANSITIONS: [(&str, Section); 3] = [
    (SALES_SETTLEMENT, Section::Sales),
    (DISTRIBUTION_SETTLEMENT, Section::Distribution),
    (ENERGY_SETTLEMENT, Section::Balance),
];

impl Section {
    /// Section a line triggers, if any. First matching trigger wins.
    pub fn triggered_by(line: &str) -> Option<Section> {
        TRANSITIONS
            .iter()
            .find(|(marker, _)| line.contains(marker))
            .map(|&(_, section)| section)
    }

    /// State after reading `line`. Triggers pointing back to an earlier
    /// section are ignored.
    pub fn next(self, line: &str) -> Section {
        match Self::triggered_by(line) {
            Some(section) if section > self => section,
            _ => self,
        }
    }
}

/// Lines of one document grouped by section, in document order.
#[derive(Debug, Clone, Default)]
pub struct Sections<'a> {
    pub reading: Vec<&'a str>,
    pub sales: Vec<&'a str>,
    pub distribution: Vec<&'a str>,
    pub balance: Vec<&'a str>,
}

impl<'a> Sections<'a> {
    /// Append a line to the given section.
    pub fn push(&mut self, section: Section, line: &'a str) {
        self.lines_mut(section).push(line);
    }

    /// Lines collected for a section.
    pub fn lines(&self, section: Section) -> &[&'a str] {
        match section {
            Section::Reading => &self.reading,
            Section::Sales => &self.sales,
            Section::Distribution => &self.distribution,
            Section::Balance => &self.balance,
        }
    }

    fn lines_mut(&mut self, section: Section) -> &mut Vec<&'a str> {
        match section {
            Section::Reading => &mut self.reading,
            Section::Sales => &mut self.sales,
            Section::Distribution => &mut self.distribution,
            Section::Balance => &mut self.balance,
        }
    }
}

/// Classify every line, returning the section each line belongs to.
pub fn classify<'a, I>(lines: I) -> impl Iterator<Item = (Section, &'a str)>
where
    I: IntoIterator<Item = &'a str>,
{
    lines.into_iter().scan(Section::default(), |state, line| {
        *state = state.next(line);
        Some((*state, line))
    })
}
