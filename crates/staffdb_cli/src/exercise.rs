//! Menu selection table.
//!
//! Each number maps to exactly one exercise; nothing falls through.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exercise {
    UppercaseShortTowns,
    ContainsEmployee,
    FirstNamesOverFloor,
    DepartmentEmployees,
    RelocateEmployee,
    AddressesByResidents,
    RaiseSalaries,
    DepartmentMaxSalaries,
    RemoveTown,
}

impl Exercise {
    /// Menu order; position + 1 is the selection number.
    pub const ALL: [Exercise; 9] = [
        Exercise::UppercaseShortTowns,
        Exercise::ContainsEmployee,
        Exercise::FirstNamesOverFloor,
        Exercise::DepartmentEmployees,
        Exercise::RelocateEmployee,
        Exercise::AddressesByResidents,
        Exercise::RaiseSalaries,
        Exercise::DepartmentMaxSalaries,
        Exercise::RemoveTown,
    ];

    pub fn from_number(number: i64) -> Option<Self> {
        let index = usize::try_from(number.checked_sub(1)?).ok()?;
        Self::ALL.get(index).copied()
    }

    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|exercise| *exercise == self)
            .map_or(0, |index| index + 1)
    }

    /// Stable name used in log events.
    pub fn slug(self) -> &'static str {
        match self {
            Self::UppercaseShortTowns => "uppercase_short_towns",
            Self::ContainsEmployee => "contains_employee",
            Self::FirstNamesOverFloor => "first_names_over_floor",
            Self::DepartmentEmployees => "department_employees",
            Self::RelocateEmployee => "relocate_employee",
            Self::AddressesByResidents => "addresses_by_residents",
            Self::RaiseSalaries => "raise_salaries",
            Self::DepartmentMaxSalaries => "department_max_salaries",
            Self::RemoveTown => "remove_town",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Exercise;

    #[test]
    fn numbers_round_trip_through_table() {
        for (index, exercise) in Exercise::ALL.iter().enumerate() {
            assert_eq!(exercise.number(), index + 1);
            assert_eq!(Exercise::from_number(index as i64 + 1), Some(*exercise));
        }
    }

    #[test]
    fn out_of_range_numbers_have_no_exercise() {
        for number in [0, -1, 10, i64::MIN, i64::MAX] {
            assert_eq!(Exercise::from_number(number), None);
        }
    }
}
