//! Piecewise translation of half-open integer intervals.
//!
//! A [`Category`] is an ordered list of [`MappingRule`]s; a [`Pipeline`]
//! threads values or interval sets through its categories in order. Rules are
//! scanned linearly and the first rule whose source overlaps wins, so listed
//! order is the tie-break when rule domains overlap.

use std::fmt;

use crate::core::text::parse_token;
use crate::error::{PuzzleError, PuzzleResult};

/// Half-open interval `[start, end)` with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    start: i64,
    end: i64,
}

impl Interval {
    pub fn new(start: i64, end: i64) -> PuzzleResult<Self> {
        if start > end {
            return Err(PuzzleError::invalid(
                format!("range [{start}, {end})"),
                "start must not exceed end",
            ));
        }
        Ok(Self { start, end })
    }

    /// Interval covering `count` values from `start`.
    pub fn with_len(start: i64, count: i64) -> PuzzleResult<Self> {
        let end = start.checked_add(count).ok_or_else(|| {
            PuzzleError::invalid(format!("range {start} +{count}"), "end overflows")
        })?;
        Self::new(start, end)
    }

    /// Caller guarantees `start <= end`.
    fn span(start: i64, end: i64) -> Self {
        debug_assert!(start <= end, "span [{start}, {end}) is inverted");
        Self { start, end }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Maps `[source_start, source_start + length)` onto
/// `[destination_start, destination_start + length)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingRule {
    pub destination_start: i64,
    pub source_start: i64,
    pub length: i64,
}

impl MappingRule {
    pub fn new(destination_start: i64, source_start: i64, length: i64) -> PuzzleResult<Self> {
        let context = || format!("rule '{destination_start} {source_start} {length}'");
        if destination_start < 0 || source_start < 0 || length < 0 {
            return Err(PuzzleError::invalid(context(), "fields must be non-negative"));
        }
        if source_start.checked_add(length).is_none()
            || destination_start.checked_add(length).is_none()
        {
            return Err(PuzzleError::invalid(context(), "rule end overflows"));
        }
        Ok(Self {
            destination_start,
            source_start,
            length,
        })
    }

    /// Parse a `destination_start source_start length` line.
    pub fn parse(line: &str) -> PuzzleResult<Self> {
        let context = format!("rule line '{line}'");
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [destination, source, length] = fields.as_slice() else {
            return Err(PuzzleError::invalid(
                context,
                format!("expected 3 fields, found {}", fields.len()),
            ));
        };
        Self::new(
            parse_token(destination, &context)?,
            parse_token(source, &context)?,
            parse_token(length, &context)?,
        )
    }

    pub fn source_end(&self) -> i64 {
        self.source_start + self.length
    }

    pub fn offset(&self) -> i64 {
        self.destination_start - self.source_start
    }

    pub fn contains(&self, value: i64) -> bool {
        self.source_start <= value && value < self.source_end()
    }

    /// Part of `interval` inside this rule's source, if non-empty.
    fn overlap(&self, interval: Interval) -> Option<Interval> {
        let start = interval.start.max(self.source_start);
        let end = interval.end.min(self.source_end());
        (start < end).then(|| Interval::span(start, end))
    }

    fn translate(&self, interval: Interval) -> Interval {
        Interval::span(interval.start + self.offset(), interval.end + self.offset())
    }
}

/// One translation stage: an identifier plus ordered rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: String,
    rules: Vec<MappingRule>,
}

impl Category {
    pub fn new(id: impl Into<String>, rules: Vec<MappingRule>) -> Self {
        Self {
            id: id.into(),
            rules,
        }
    }

    /// Parse a header line (`seed-to-soil map:`) followed by rule lines.
    pub fn parse(lines: &[&str]) -> PuzzleResult<Self> {
        let Some((header, rule_lines)) = lines.split_first() else {
            return Err(PuzzleError::invalid("category block", "block is empty"));
        };
        let rules = rule_lines
            .iter()
            .map(|line| MappingRule::parse(line))
            .collect::<PuzzleResult<Vec<_>>>()?;
        Ok(Self::new(category_id(header), rules))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn rules(&self) -> &[MappingRule] {
        &self.rules
    }

    /// Translate one value: first rule containing it, else identity.
    pub fn convert(&self, value: i64) -> i64 {
        self.rules
            .iter()
            .find(|rule| rule.contains(value))
            .map_or(value, |rule| value + rule.offset())
    }

    /// Translate a set of intervals, splitting them at rule boundaries.
    ///
    /// Every input point lands in exactly one output interval. Output order
    /// is unspecified.
    pub fn remap(&self, intervals: &[Interval]) -> Vec<Interval> {
        let mut pending = intervals.to_vec();
        let mut remapped = Vec::with_capacity(pending.len());
        while let Some(interval) = pending.pop() {
            let claimed = self
                .rules
                .iter()
                .find_map(|rule| rule.overlap(interval).map(|overlap| (rule, overlap)));
            let Some((rule, overlap)) = claimed else {
                remapped.push(interval);
                continue;
            };
            remapped.push(rule.translate(overlap));
            if interval.start < overlap.start {
                pending.push(Interval::span(interval.start, overlap.start));
            }
            if overlap.end < interval.end {
                pending.push(Interval::span(overlap.end, interval.end));
            }
        }
        remapped
    }
}

/// `seed-to-soil map:` -> `seed_to_soil map`.
fn category_id(header: &str) -> String {
    header.trim().trim_matches(':').to_lowercase().replace('-', "_")
}

/// Ordered categories applied in turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    categories: Vec<Category>,
}

impl Pipeline {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn convert(&self, value: i64) -> i64 {
        self.categories
            .iter()
            .fold(value, |current, category| category.convert(current))
    }

    pub fn remap(&self, intervals: &[Interval]) -> Vec<Interval> {
        self.categories
            .iter()
            .fold(intervals.to_vec(), |current, category| category.remap(&current))
    }
}

/// Convert `start count` pairs into intervals. Zero-count pairs are dropped.
pub fn intervals_from_pairs(values: &[i64]) -> PuzzleResult<Vec<Interval>> {
    if values.len() % 2 != 0 {
        return Err(PuzzleError::invalid(
            format!("{} range values", values.len()),
            "expected start/count pairs",
        ));
    }
    values
        .chunks_exact(2)
        .map(|pair| Interval::with_len(pair[0], pair[1]))
        .filter(|interval| !interval.as_ref().is_ok_and(Interval::is_empty))
        .collect()
}

/// Smallest start across the non-empty `intervals`.
pub fn lowest_start(intervals: &[Interval]) -> Option<i64> {
    intervals
        .iter()
        .filter(|interval| !interval.is_empty())
        .map(Interval::start)
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(start: i64, end: i64) -> Interval {
        Interval::new(start, end).expect("valid interval")
    }

    fn rule(destination: i64, source: i64, length: i64) -> MappingRule {
        MappingRule::new(destination, source, length).expect("valid rule")
    }

    fn sorted(mut intervals: Vec<Interval>) -> Vec<Interval> {
        intervals.sort();
        intervals
    }

    #[test]
    fn interval_rejects_inverted_bounds() {
        let err = Interval::new(10, 5).expect_err("inverted");
        assert!(err.to_string().contains("[10, 5)"));
    }

    #[test]
    fn disjoint_interval_passes_through() {
        let category = Category::new("a", vec![rule(100, 50, 10)]);
        assert_eq!(category.remap(&[interval(0, 10)]), vec![interval(0, 10)]);
    }

    #[test]
    fn contained_interval_maps_without_residual() {
        let category = Category::new("a", vec![rule(100, 5, 5)]);
        assert_eq!(category.remap(&[interval(5, 10)]), vec![interval(100, 105)]);
    }

    #[test]
    fn partial_overlap_splits_into_prefix_mapped_and_suffix() {
        let category = Category::new("a", vec![rule(50, 5, 3)]);
        let out = sorted(category.remap(&[interval(0, 10)]));
        assert_eq!(out, vec![interval(0, 5), interval(8, 10), interval(50, 53)]);
    }

    #[test]
    fn interval_spanning_several_rules_is_fully_claimed() {
        let category = Category::new("a", vec![rule(100, 0, 3), rule(200, 5, 2)]);
        let out = sorted(category.remap(&[interval(0, 10)]));
        assert_eq!(
            out,
            vec![
                interval(3, 5),
                interval(7, 10),
                interval(100, 103),
                interval(200, 202)
            ]
        );
    }

    #[test]
    fn chained_categories_compose() {
        let pipeline = Pipeline::new(vec![
            Category::new("a", vec![rule(100, 0, 10)]),
            Category::new("b", vec![rule(1000, 100, 5)]),
        ]);
        let out = sorted(pipeline.remap(&[interval(2, 8)]));
        assert_eq!(out, vec![interval(105, 108), interval(1002, 1005)]);
        assert_eq!(pipeline.convert(2), 1002);
        assert_eq!(pipeline.convert(7), 107);
    }

    #[test]
    fn empty_rule_list_is_identity() {
        let category = Category::new("empty", Vec::new());
        let input = vec![interval(3, 9), interval(20, 21)];
        assert_eq!(sorted(category.remap(&input)), input);
        assert_eq!(category.convert(42), 42);
    }

    #[test]
    fn zero_length_interval_passes_through() {
        let category = Category::new("a", vec![rule(100, 0, 10)]);
        assert_eq!(category.remap(&[interval(5, 5)]), vec![interval(5, 5)]);
    }

    #[test]
    fn overlapping_rules_prefer_first_listed() {
        let category = Category::new("a", vec![rule(100, 0, 10), rule(500, 0, 10)]);
        assert_eq!(category.remap(&[interval(2, 4)]), vec![interval(102, 104)]);
        assert_eq!(category.convert(2), 102);
    }

    #[test]
    fn convert_respects_half_open_source() {
        let category = Category::new("a", vec![rule(50, 98, 2)]);
        assert_eq!(category.convert(98), 50);
        assert_eq!(category.convert(99), 51);
        assert_eq!(category.convert(100), 100);
    }

    #[test]
    fn lowest_start_picks_minimum() {
        let out = vec![interval(50, 60), interval(10, 20), interval(200, 210)];
        assert_eq!(lowest_start(&out), Some(10));
        assert_eq!(lowest_start(&[]), None);
    }

    #[test]
    fn lowest_start_ignores_empty_intervals() {
        let out = vec![interval(5, 5), interval(100, 110)];
        assert_eq!(lowest_start(&out), Some(100));
        assert_eq!(lowest_start(&[interval(3, 3)]), None);
    }

    #[test]
    fn parse_category_block() {
        let category =
            Category::parse(&["seed-to-soil map:", "50 98 2", "52 50 48"]).expect("parse");
        assert_eq!(category.id(), "seed_to_soil map");
        assert_eq!(category.rules(), &[rule(50, 98, 2), rule(52, 50, 48)]);
    }

    #[test]
    fn parse_rule_rejects_wrong_field_count() {
        let err = MappingRule::parse("50 98").expect_err("two fields");
        assert!(err.to_string().contains("'50 98'"));
        assert!(err.to_string().contains("expected 3 fields"));
    }

    #[test]
    fn parse_rule_rejects_negative_fields() {
        assert!(MappingRule::parse("50 -98 2").is_err());
    }

    #[test]
    fn pairs_become_half_open_intervals() {
        let intervals = intervals_from_pairs(&[79, 14, 55, 13]).expect("pairs");
        assert_eq!(intervals, vec![interval(79, 93), interval(55, 68)]);
        assert!(intervals_from_pairs(&[1, 2, 3]).is_err());
    }

    #[test]
    fn zero_count_pairs_are_dropped() {
        let intervals = intervals_from_pairs(&[5, 0, 100, 10]).expect("pairs");
        assert_eq!(intervals, vec![interval(100, 110)]);
    }
}
