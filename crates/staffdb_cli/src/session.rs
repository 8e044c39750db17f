//! One console run: read a selection, execute that exercise, print results.
//!
//! # Invariants
//! - Exactly one exercise runs per session.
//! - Repositories are built from the borrowed connection per exercise; the
//!   session holds no state between runs.

use crate::error::{CliError, CliResult};
use crate::exercise::Exercise;
use crate::report;
use log::{error, info};
use rusqlite::Connection;
use staffdb_core::{
    AddressService, DepartmentService, EmployeeService, ExerciseSettings, SqliteAddressRepository,
    SqliteDepartmentRepository, SqliteEmployeeRepository, SqliteTownRepository, TownService,
};
use std::io::{BufRead, Write};
use std::time::Instant;

pub struct Session<'a, R, W> {
    conn: &'a Connection,
    settings: &'a ExerciseSettings,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(conn: &'a Connection, settings: &'a ExerciseSettings, input: R, output: W) -> Self {
        Self {
            conn,
            settings,
            input,
            output,
        }
    }

    /// Prompts for an exercise number and runs that exercise once.
    pub fn run(&mut self) -> CliResult<Exercise> {
        let raw = self.prompt("Select ex number:")?;
        let exercise = parse_selection(&raw)?;

        let started_at = Instant::now();
        info!(
            "event=exercise_run module=cli status=start exercise={}",
            exercise.slug()
        );
        match self.run_exercise(exercise) {
            Ok(()) => {
                info!(
                    "event=exercise_run module=cli status=ok exercise={} duration_ms={}",
                    exercise.slug(),
                    started_at.elapsed().as_millis()
                );
                self.output.flush()?;
                Ok(exercise)
            }
            Err(err) => {
                error!(
                    "event=exercise_run module=cli status=error exercise={} duration_ms={} error={}",
                    exercise.slug(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    fn run_exercise(&mut self, exercise: Exercise) -> CliResult<()> {
        match exercise {
            Exercise::UppercaseShortTowns => self.uppercase_short_towns(),
            Exercise::ContainsEmployee => self.contains_employee(),
            Exercise::FirstNamesOverFloor => self.first_names_over_floor(),
            Exercise::DepartmentEmployees => self.department_employees(),
            Exercise::RelocateEmployee => self.relocate_employee(),
            Exercise::AddressesByResidents => self.addresses_by_residents(),
            Exercise::RaiseSalaries => self.raise_salaries(),
            Exercise::DepartmentMaxSalaries => self.department_max_salaries(),
            Exercise::RemoveTown => self.remove_town(),
        }
    }

    fn uppercase_short_towns(&mut self) -> CliResult<()> {
        let affected = self
            .town_service()?
            .uppercase_short_towns(self.settings.short_town_name_len)?;
        writeln!(self.output, "{affected}")?;
        Ok(())
    }

    fn contains_employee(&mut self) -> CliResult<()> {
        let answer = self.prompt("Enter employee full name:")?;
        let (first_name, last_name) = parse_full_name(&answer)?;
        let found = self.employee_service()?.contains_employee(first_name, last_name)?;
        writeln!(self.output, "{}", report::yes_no(found))?;
        Ok(())
    }

    fn first_names_over_floor(&mut self) -> CliResult<()> {
        let names = self
            .employee_service()?
            .first_names_earning_over(self.settings.salary_floor)?;
        for name in names {
            writeln!(self.output, "{name}")?;
        }
        Ok(())
    }

    fn department_employees(&mut self) -> CliResult<()> {
        let rows = self
            .employee_service()?
            .employees_in_department(&self.settings.department_name)?;
        for row in &rows {
            writeln!(self.output, "{}", report::department_employee_line(row))?;
        }
        Ok(())
    }

    fn relocate_employee(&mut self) -> CliResult<()> {
        let last_name = self.prompt("Enter employee last name:")?;
        if last_name.trim().is_empty() {
            return Err(CliError::InvalidInput("last name must not be blank".to_string()));
        }

        let service = AddressService::new(
            SqliteAddressRepository::try_new(self.conn)?,
            SqliteEmployeeRepository::try_new(self.conn)?,
        );
        let (employee, address) =
            service.relocate_employee(&last_name, &self.settings.new_address_text)?;
        writeln!(
            self.output,
            "Address {} assigned to {}",
            address.text,
            employee.full_name()
        )?;
        Ok(())
    }

    fn addresses_by_residents(&mut self) -> CliResult<()> {
        let service = AddressService::new(
            SqliteAddressRepository::try_new(self.conn)?,
            SqliteEmployeeRepository::try_new(self.conn)?,
        );
        let rows = service.most_populated_addresses(self.settings.top_address_limit)?;
        for row in &rows {
            writeln!(self.output, "{}", report::occupancy_line(row))?;
        }
        Ok(())
    }

    fn raise_salaries(&mut self) -> CliResult<()> {
        let affected = self.employee_service()?.raise_salaries(
            &self.settings.raise_department_ids,
            self.settings.raise_factor,
        )?;
        writeln!(self.output, "{affected}")?;
        Ok(())
    }

    fn department_max_salaries(&mut self) -> CliResult<()> {
        let service = DepartmentService::new(SqliteDepartmentRepository::try_new(self.conn)?);
        let rows = service
            .max_salaries_outside(self.settings.max_salary_low, self.settings.max_salary_high)?;
        for row in &rows {
            writeln!(self.output, "{}", report::max_salary_line(row))?;
        }
        Ok(())
    }

    fn remove_town(&mut self) -> CliResult<()> {
        let town_name = self.prompt("Enter town name:")?;
        let outcome = self.town_service()?.remove_town_cascade(&town_name)?;
        writeln!(self.output, "{}", report::cascade_line(&outcome))?;
        Ok(())
    }

    fn town_service(
        &self,
    ) -> CliResult<TownService<SqliteTownRepository<'a>, SqliteAddressRepository<'a>>> {
        Ok(TownService::new(
            SqliteTownRepository::try_new(self.conn)?,
            SqliteAddressRepository::try_new(self.conn)?,
        ))
    }

    fn employee_service(&self) -> CliResult<EmployeeService<SqliteEmployeeRepository<'a>>> {
        Ok(EmployeeService::new(SqliteEmployeeRepository::try_new(
            self.conn,
        )?))
    }

    fn prompt(&mut self, message: &str) -> CliResult<String> {
        writeln!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InvalidInput(
                "input ended before an answer was given".to_string(),
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

fn parse_selection(raw: &str) -> CliResult<Exercise> {
    let number = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| CliError::InvalidSelection(raw.trim().to_string()))?;
    Exercise::from_number(number).ok_or(CliError::UnknownExercise(number))
}

fn parse_full_name(raw: &str) -> CliResult<(&str, &str)> {
    let mut parts = raw.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some(first_name), Some(last_name)) => Ok((first_name, last_name)),
        _ => Err(CliError::InvalidInput(format!(
            "expected `<first name> <last name>`, got `{}`",
            raw.trim()
        ))),
    }
}
