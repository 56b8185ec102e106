//! Employment-history records.
//!
//! A [`LogicalRecord`] is one entry of the "vida laboral" table once line
//! wraps have been merged back together. Field order matches the printed
//! report and the CSV output.

use serde::Serialize;

/// Number of columns in an employment-history table.
pub const COLUMN_COUNT: usize = 10;

/// Output column names, in table order.
pub const COLUMN_HEADERS: [&str; COLUMN_COUNT] = [
    "RÉGIMEN",
    "ID EMPRESA",
    "NOMBRE EMPRESA",
    "FECHA ALTA",
    "FECHA DE EFECTO DE ALTA",
    "FECHA DE BAJA",
    "C.T.",
    "CTP %",
    "G.C.",
    "DÍAS",
];

/// Positional index of the "days" column, the record-boundary marker.
pub const DAYS_COLUMN: usize = 9;

/// Positional index of the employer name column.
pub const EMPLOYER_NAME_COLUMN: usize = 2;

/// One reconstructed employment-history entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogicalRecord {
    /// Social Security regime code
    #[serde(rename = "RÉGIMEN")]
    pub regime: String,
    /// Employer account identifier
    #[serde(rename = "ID EMPRESA")]
    pub employer_id: String,
    /// Employer name, possibly wrapped over several printed lines
    #[serde(rename = "NOMBRE EMPRESA")]
    pub employer_name: String,
    /// Registration date
    #[serde(rename = "FECHA ALTA")]
    pub registration_date: String,
    /// Effective registration date
    #[serde(rename = "FECHA DE EFECTO DE ALTA")]
    pub effective_registration_date: String,
    /// Deregistration date
    #[serde(rename = "FECHA DE BAJA")]
    pub deregistration_date: String,
    /// Contract type code
    #[serde(rename = "C.T.")]
    pub contract_type: String,
    /// Part-time percentage
    #[serde(rename = "CTP %")]
    pub part_time_percentage: String,
    /// Contribution group
    #[serde(rename = "G.C.")]
    pub contribution_group: String,
    /// Days contributed
    #[serde(rename = "DÍAS")]
    pub days: String,
}

impl LogicalRecord {
    /// Build a record from exactly [`COLUMN_COUNT`] cells, in table order.
    pub fn from_cells(cells: [String; COLUMN_COUNT]) -> Self {
        let [
            regime,
            employer_id,
            employer_name,
            registration_date,
            effective_registration_date,
            deregistration_date,
            contract_type,
            part_time_percentage,
            contribution_group,
            days,
        ] = cells;
        Self {
            regime,
            employer_id,
            employer_name,
            registration_date,
            effective_registration_date,
            deregistration_date,
            contract_type,
            part_time_percentage,
            contribution_group,
            days,
        }
    }

    /// Field values in table order.
    pub fn fields(&self) -> [&str; COLUMN_COUNT] {
        [
            &self.regime,
            &self.employer_id,
            &self.employer_name,
            &self.registration_date,
            &self.effective_registration_date,
            &self.deregistration_date,
            &self.contract_type,
            &self.part_time_percentage,
            &self.contribution_group,
            &self.days,
        ]
    }

    /// Mutable access to a field by column index.
    ///
    /// Returns `None` when `column` is not below [`COLUMN_COUNT`].
    pub fn field_mut(&mut self, column: usize) -> Option<&mut String> {
        let field = match column {
            0 => &mut self.regime,
            1 => &mut self.employer_id,
            2 => &mut self.employer_name,
            3 => &mut self.registration_date,
            4 => &mut self.effective_registration_date,
            5 => &mut self.deregistration_date,
            6 => &mut self.contract_type,
            7 => &mut self.part_time_percentage,
            8 => &mut self.contribution_group,
            9 => &mut self.days,
            _ => return None,
        };
        Some(field)
    }

    /// Append wrapped text to a column.
    ///
    /// Blank text is ignored. Non-blank text is joined to the trimmed
    /// existing value with a single space, or replaces it when that value
    /// is blank.
    pub fn append(&mut self, column: usize, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        if let Some(field) = self.field_mut(column) {
            let existing = field.trim();
            *field = if existing.is_empty() {
                text.to_string()
            } else {
                format!("{} {}", existing, text)
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: [&str; COLUMN_COUNT]) -> [String; COLUMN_COUNT] {
        values.map(String::from)
    }

    #[test]
    fn test_from_cells_preserves_order() {
        let record = LogicalRecord::from_cells(cells([
            "GENERAL", "0111 10", "ACME", "01.02.2019", "01.02.2019", "31.12.2019", "100", "", "05",
            "334",
        ]));
        assert_eq!(record.regime, "GENERAL");
        assert_eq!(record.employer_name, "ACME");
        assert_eq!(record.days, "334");
        assert_eq!(record.fields()[DAYS_COLUMN], "334");
        assert_eq!(record.fields()[EMPLOYER_NAME_COLUMN], "ACME");
    }

    #[test]
    fn test_append_joins_with_space() {
        let mut record = LogicalRecord {
            employer_name: "ACME".to_string(),
            ..Default::default()
        };
        record.append(EMPLOYER_NAME_COLUMN, "CORP");
        assert_eq!(record.employer_name, "ACME CORP");
    }

    #[test]
    fn test_append_to_empty_has_no_leading_space() {
        let mut record = LogicalRecord::default();
        record.append(EMPLOYER_NAME_COLUMN, "CORP");
        assert_eq!(record.employer_name, "CORP");
    }

    #[test]
    fn test_append_blank_is_noop() {
        let mut record = LogicalRecord {
            employer_name: "ACME".to_string(),
            ..Default::default()
        };
        record.append(EMPLOYER_NAME_COLUMN, "   ");
        assert_eq!(record.employer_name, "ACME");
    }

    #[test]
    fn test_append_over_whitespace_value() {
        let mut record = LogicalRecord {
            employer_name: "  ".to_string(),
            contract_type: " 401 ".to_string(),
            ..Default::default()
        };
        record.append(EMPLOYER_NAME_COLUMN, "X");
        record.append(6, "B");
        assert_eq!(record.employer_name, "X");
        assert_eq!(record.contract_type, "401 B");
    }

    #[test]
    fn test_field_mut_out_of_range() {
        let mut record = LogicalRecord::default();
        assert!(record.field_mut(COLUMN_COUNT).is_none());
    }

    #[test]
    fn test_headers_match_serialized_names() {
        let mut writer = csv::Writer::from_writer(vec![]);
        writer.serialize(LogicalRecord::default()).unwrap();
        let bytes = writer.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(header, COLUMN_HEADERS.join(","));
    }
}
