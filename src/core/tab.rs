// Simulation Tabs
// The closed set of tab identifiers and the fixed descriptor list derived from it

use std::fmt;

/// Identifier of a selectable view in the simulation manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SimulationTab {
    /// Running simulations
    #[default]
    Active,
    /// Reusable scenario templates
    Templates,
    /// Completed runs and their debrief reports
    History,
    /// Instructor documentation
    Guide,
}

/// Static record describing one tab button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabDescriptor {
    pub tab: SimulationTab,
    pub label: &'static str,
    pub icon: &'static str,
    /// Uses the highlight styling regardless of selection
    pub highlighted: bool,
}

impl SimulationTab {
    /// All tabs in left-to-right render order
    pub const ALL: [SimulationTab; 4] = [
        SimulationTab::Active,
        SimulationTab::Templates,
        SimulationTab::History,
        SimulationTab::Guide,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SimulationTab::Active => "active",
            SimulationTab::Templates => "templates",
            SimulationTab::History => "history",
            SimulationTab::Guide => "guide",
        }
    }

    pub fn descriptor(self) -> TabDescriptor {
        let (label, icon, highlighted) = match self {
            SimulationTab::Active => ("Active Simulations", "▶", false),
            SimulationTab::Templates => ("Templates", "▤", false),
            SimulationTab::History => ("Debrief Reports", "▥", false),
            SimulationTab::Guide => ("Instructor Guide", "◆", true),
        };

        TabDescriptor {
            tab: self,
            label,
            icon,
            highlighted,
        }
    }

    /// Position of this tab in the render order
    pub fn index(self) -> usize {
        match self {
            SimulationTab::Active => 0,
            SimulationTab::Templates => 1,
            SimulationTab::History => 2,
            SimulationTab::Guide => 3,
        }
    }

    /// Tab at a 1-based position (as shown to the user for number keys)
    pub fn from_position(position: usize) -> Option<SimulationTab> {
        position
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    /// Next tab, wrapping from the last back to the first
    pub fn next(self) -> SimulationTab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping from the first to the last
    pub fn previous(self) -> SimulationTab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SimulationTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The fixed, ordered descriptor list for the tab row
pub fn descriptors() -> [TabDescriptor; 4] {
    SimulationTab::ALL.map(SimulationTab::descriptor)
}
