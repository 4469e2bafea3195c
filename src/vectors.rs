//! Known-answer vectors in the `input,output` tryte-pair format.
//!
//! One pair per line. Blank lines and lines starting with `#` are skipped.
//! The input is absorbed into a fresh sponge and as many trits as the
//! output holds are squeezed back out.

use crate::convert::{trits_to_trytes, trytes_to_trits};
use crate::sponge::{Config, Kerl};
use crate::{Error, Result, TRYTE_HASH_LENGTH};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vector {
    /// 1-based line in the source text.
    pub line: usize,
    pub input: String,
    pub expected: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail { actual: String },
    Error(Error),
}

#[derive(Debug, Default)]
pub struct VectorReport {
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub details: Vec<(usize, Outcome)>,
}

impl VectorReport {
    pub fn record(&mut self, line: usize, outcome: Outcome) {
        match &outcome {
            Outcome::Pass => self.passed += 1,
            Outcome::Fail { .. } => self.failed += 1,
            Outcome::Error(_) => self.errors += 1,
        }
        self.details.push((line, outcome));
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.errors
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }

    pub fn summary(&self) -> String {
        format!(
            "{} passed, {} failed, {} errors (total: {})",
            self.passed,
            self.failed,
            self.errors,
            self.total()
        )
    }
}

fn check_trytes(line: usize, field: &str, trytes: &str) -> Result<()> {
    let malformed = |reason: String| Error::MalformedVector { line, reason };
    if trytes.is_empty() || trytes.len() % TRYTE_HASH_LENGTH != 0 {
        return Err(malformed(format!(
            "{field} has {} trytes, not a positive multiple of {TRYTE_HASH_LENGTH}",
            trytes.len()
        )));
    }
    trytes_to_trits(trytes).map_err(|e| malformed(format!("{field}: {e}")))?;
    Ok(())
}

pub fn parse_vectors(text: &str) -> Result<Vec<Vector>> {
    text.lines()
        .enumerate()
        .map(|(i, raw)| (i + 1, raw.trim()))
        .filter(|(_, raw)| !raw.is_empty() && !raw.starts_with('#'))
        .map(|(line, raw)| -> Result<Vector> {
            let (input, expected) = raw.split_once(',').ok_or_else(|| Error::MalformedVector {
                line,
                reason: "missing ',' separator".to_string(),
            })?;
            let (input, expected) = (input.trim(), expected.trim());
            check_trytes(line, "input", input)?;
            check_trytes(line, "output", expected)?;
            Ok(Vector {
                line,
                input: input.to_string(),
                expected: expected.to_string(),
            })
        })
        .collect()
}

/// Hashes `vector.input` and returns the squeezed trytes.
pub fn run_vector(vector: &Vector, config: Config) -> Result<String> {
    let mut trits = trytes_to_trits(&vector.input)?;
    let mut kerl = Kerl::with_config(config);
    kerl.absorb(&mut trits)?;
    let mut out = vec![0; vector.expected.len() * 3];
    kerl.squeeze(&mut out)?;
    trits_to_trytes(&out)
}

pub fn run_all(vectors: &[Vector], config: Config) -> VectorReport {
    let mut report = VectorReport::default();
    for vector in vectors {
        let outcome = match run_vector(vector, config) {
            Ok(actual) if actual == vector.expected => Outcome::Pass,
            Ok(actual) => {
                warn!(line = vector.line, %actual, expected = %vector.expected, "mismatch");
                Outcome::Fail { actual }
            }
            Err(e) => {
                warn!(line = vector.line, error = %e, "vector failed");
                Outcome::Error(e)
            }
        };
        report.record(vector.line, outcome);
    }
    info!(summary = %report.summary(), "vectors");
    report
}

#[cfg(test)]
mod test {
    use super::{parse_vectors, run_all, Outcome};
    use crate::sponge::Config;
    use crate::Error;

    const INPUT: &str = "EMIDYNHBWMBCXVDEFOFWINXTERALUKYYPPHKP9JJFGJEIUY9MUDVNFZHMMWZUYUSWAIOWEVTHNWMHANBH";
    const OUTPUT: &str = "EJEAOOZYSAWFPZQESYDHZCGYNSTWXUMVJOVDWUNZJXDGWCLUFGIMZRMGCAZGKNPLBRLGUNYWKLJTYEAQX";

    #[test]
    fn test_parse_skips_comments() {
        let text = format!("# reference\n\n  {INPUT} , {OUTPUT}  \n");
        let vectors = parse_vectors(&text).unwrap();
        assert_eq!(vectors.len(), 1);
        assert_eq!(vectors[0].line, 3);
        assert_eq!(vectors[0].input, INPUT);
        assert_eq!(vectors[0].expected, OUTPUT);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        fn line_of(text: &str) -> usize {
            match parse_vectors(text) {
                Err(Error::MalformedVector { line, .. }) => line,
                other => panic!("unexpected {other:?}"),
            }
        }
        assert_eq!(line_of(INPUT), 1);
        assert_eq!(line_of(&format!("#\n{INPUT},ABC")), 2);
        assert_eq!(line_of(&format!("{INPUT},{}", OUTPUT.replace('E', "e"))), 1);
        assert_eq!(line_of(&format!(",{OUTPUT}")), 1);
    }

    #[test]
    fn test_run_all_reports_mismatch() {
        let wrong = OUTPUT.replace('E', "9");
        let text = format!("{INPUT},{OUTPUT}\n{INPUT},{wrong}\n");
        let vectors = parse_vectors(&text).unwrap();
        let report = run_all(&vectors, Config::default());
        assert_eq!(report.passed, 1);
        assert_eq!(report.failed, 1);
        assert!(!report.all_passed());
        assert_eq!(
            report.details[1],
            (
                2,
                Outcome::Fail {
                    actual: OUTPUT.to_string()
                }
            )
        );
    }
}
