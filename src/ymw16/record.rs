use log::debug;

use crate::error::{ParseIssue, QueryError};
use crate::models::{ModelRecord, truncate_mode};

/// Number of `;`-separated fields on the model output line.
pub const FIELD_COUNT: usize = 7;

const DELIMITER: char = ';';

/// pc -> kpc
pub fn pc_to_kpc(dist_pc: f64) -> f64 {
    1e-3 * dist_pc
}

/// Scattering time from its base-10 logarithm.
pub fn taus_from_log10(log_taus: f64) -> f64 {
    10f64.powf(log_taus)
}

/// Parses the captured standard output of one `ymw16 -o Gal ...` run.
///
/// Blank lines are skipped; exactly one line of seven fields must remain.
/// Distance is returned in kpc and the scattering time as a linear value.
pub fn parse_record(stdout: &[u8]) -> Result<ModelRecord, QueryError> {
    let text = std::str::from_utf8(stdout).map_err(|_| QueryError::Parse {
        line: String::from_utf8_lossy(stdout).trim().to_string(),
        issue: ParseIssue::NotUtf8,
    })?;

    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    let line = match lines.as_slice() {
        [line] => *line,
        [] => {
            return Err(QueryError::Parse {
                line: String::new(),
                issue: ParseIssue::EmptyOutput,
            });
        }
        more => {
            return Err(QueryError::Parse {
                line: text.trim().to_string(),
                issue: ParseIssue::UnexpectedLines(more.len()),
            });
        }
    };
    debug!("model output: {}", line);

    parse_line(line).map_err(|issue| QueryError::Parse {
        line: line.to_string(),
        issue,
    })
}

fn parse_line(line: &str) -> Result<ModelRecord, ParseIssue> {
    let fields: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(ParseIssue::FieldCount {
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    }

    let names = ModelRecord::FIELD_NAMES;
    let mut values = [0.0_f64; FIELD_COUNT - 1];
    for (i, value) in values.iter_mut().enumerate() {
        *value = parse_number(names[i + 1], fields[i + 1])?;
    }
    let [gl, gb, dm, dm_gal, dist_pc, log_taus] = values;

    Ok(ModelRecord {
        mode: truncate_mode(fields[0]).to_string(),
        gl,
        gb,
        dm,
        dm_gal,
        dist: pc_to_kpc(dist_pc),
        taus: taus_from_log10(log_taus),
    })
}

fn parse_number(field: &'static str, raw: &str) -> Result<f64, ParseIssue> {
    raw.parse::<f64>().map_err(|_| ParseIssue::NotANumber {
        field,
        value: raw.to_string(),
    })
}
