//! Parser for the human-authored `.rules` source format.
//!
//! Line-oriented, one rule per line, declaration order preserved:
//!
//! ```text
//! # clusters first
//! th => Th
//! p  => Ptk @start @end
//! w  => W @start
//! ```

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::space0,
    combinator::map,
    multi::many0,
    sequence::preceded,
    IResult,
};
use thiserror::Error;

use phonos_protocol::sound::UnknownKind;
use phonos_protocol::{Rule, RuleAnchors, RuleSet, RuleSetError, SoundKind};

#[derive(Error, Debug)]
pub enum RuleTextError {
    #[error("line {line}: expected 'pattern => Kind [@start] [@end]'")]
    Malformed { line: usize },
    #[error("line {line}: {source}")]
    UnknownKind { line: usize, source: UnknownKind },
    #[error(transparent)]
    Invalid(#[from] RuleSetError),
}

fn pattern_token(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace())(input)
}

fn kind_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric())(input)
}

fn anchor(input: &str) -> IResult<&str, RuleAnchors> {
    alt((
        map(tag("@start"), |_| RuleAnchors::WORD_START),
        map(tag("@end"), |_| RuleAnchors::WORD_END),
    ))(input)
}

/// `pattern => Kind [@start] [@end]`, with the pattern and arrow whitespace
/// separated so patterns stay free-form.
fn rule_line(input: &str) -> IResult<&str, (&str, &str, RuleAnchors)> {
    let (input, _) = space0(input)?;
    let (input, pattern) = pattern_token(input)?;
    let (input, _) = space0(input)?;
    let (input, _) = tag("=>")(input)?;
    let (input, _) = space0(input)?;
    let (input, kind) = kind_name(input)?;
    let (input, anchor_list) = many0(preceded(space0, anchor))(input)?;
    let (input, _) = space0(input)?;

    let anchors = anchor_list
        .into_iter()
        .fold(RuleAnchors::empty(), |acc, a| acc | a);

    Ok((input, (pattern, kind, anchors)))
}

/// Parses and validates a complete rule source.
pub fn parse_rules(source: &str) -> Result<RuleSet, RuleTextError> {
    let mut rules = Vec::new();

    for (number, raw_line) in source.lines().enumerate() {
        let line = number + 1;
        let trimmed = raw_line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (rest, (pattern, kind, anchors)) =
            rule_line(trimmed).map_err(|_| RuleTextError::Malformed { line })?;

        if !rest.is_empty() {
            return Err(RuleTextError::Malformed { line });
        }

        let kind: SoundKind = kind
            .parse()
            .map_err(|source| RuleTextError::UnknownKind { line, source })?;

        rules.push(Rule {
            pattern: pattern.to_string(),
            kind,
            anchors,
        });
    }

    let ruleset = RuleSet { version: 1, rules };
    ruleset.validate()?;

    Ok(ruleset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rules_in_order() {
        let source = "\
# clusters first
th => Th
ch => Ch

p => Ptk @start @end
w => W @start
";
        let ruleset = parse_rules(source).unwrap();

        assert_eq!(ruleset.rules.len(), 4);
        assert_eq!(ruleset.rules[0].pattern, "th");
        assert_eq!(ruleset.rules[0].kind, SoundKind::Th);
        assert_eq!(ruleset.rules[0].anchors, RuleAnchors::empty());
        assert_eq!(
            ruleset.rules[2].anchors,
            RuleAnchors::WORD_START | RuleAnchors::WORD_END
        );
        assert_eq!(ruleset.rules[3].anchors, RuleAnchors::WORD_START);
    }

    #[test]
    fn malformed_line_reports_its_number() {
        let source = "th => Th\nnot a rule\n";

        match parse_rules(source) {
            Err(RuleTextError::Malformed { line }) => assert_eq!(line, 2),
            other => panic!("expected Malformed, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn unknown_kind_reports_its_number() {
        let source = "th => Weird\n";

        match parse_rules(source) {
            Err(RuleTextError::UnknownKind { line, .. }) => assert_eq!(line, 1),
            other => panic!("expected UnknownKind, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn duplicate_patterns_fail_validation() {
        let source = "th => Th\nth => Ch\n";

        assert!(matches!(
            parse_rules(source),
            Err(RuleTextError::Invalid(RuleSetError::DuplicatePattern { .. }))
        ));
    }

    #[test]
    fn undefined_kind_fails_validation() {
        let source = "xx => Undefined\n";

        assert!(matches!(
            parse_rules(source),
            Err(RuleTextError::Invalid(RuleSetError::UndefinedKind { .. }))
        ));
    }
}
