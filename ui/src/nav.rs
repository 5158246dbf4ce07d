/// Places the admin console can send the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Dashboard,
    MonthlyReports,
    ManagePatients,
}

impl Destination {
    pub fn path(self) -> &'static str {
        match self {
            Destination::Dashboard | Destination::ManagePatients => "/dashboard",
            Destination::MonthlyReports => "/reports",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Destination::Dashboard => "Dashboard",
            Destination::MonthlyReports => "Monthly Reports",
            Destination::ManagePatients => "Manage Patients",
        }
    }
}

/// Shortcuts shown in the admin console's quick actions card.
pub const QUICK_ACTIONS: [Destination; 2] = [Destination::MonthlyReports, Destination::ManagePatients];
