//! Backend payload types
//!
//! Shapes served by the aggregation backend. Missing dimension keys
//! deserialize to `None`; the render layer picks the fallback (0 for chart
//! data, "N/A" for text). Range and consistency checks live in [`Validate`].

use crate::transform::question_number;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Lowest score the assessment produces
pub const SCORE_MIN: f64 = 0.0;
/// Highest score the assessment produces
pub const SCORE_MAX: f64 = 6.0;
/// Allowed drift between a supplied gap and the recomputed one
const GAP_TOLERANCE: f64 = 0.01;

/// Scored dimension of the questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Dimension {
    Noc,
    Nfc,
    Nac,
    Geral,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [Self::Noc, Self::Nfc, Self::Nac, Self::Geral];
    /// The three questionnaire dimensions, without the overall mean
    pub const SCORED: [Dimension; 3] = [Self::Noc, Self::Nfc, Self::Nac];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Noc => "NOC",
            Self::Nfc => "NFC",
            Self::Nac => "NAC",
            Self::Geral => "GERAL",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.code() == code)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Aggregation tier used as the comparison axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InstitutionLevel {
    Unifor,
    Ceara,
    Nordeste,
    Brasil,
}

impl InstitutionLevel {
    pub const ALL: [InstitutionLevel; 4] = [Self::Unifor, Self::Ceara, Self::Nordeste, Self::Brasil];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Unifor => "UNIFOR",
            Self::Ceara => "CEARA",
            Self::Nordeste => "NORDESTE",
            Self::Brasil => "BRASIL",
        }
    }
}

impl fmt::Display for InstitutionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Score per dimension; absent keys stay `None`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    #[serde(rename = "NOC", default, skip_serializing_if = "Option::is_none")]
    pub noc: Option<f64>,
    #[serde(rename = "NFC", default, skip_serializing_if = "Option::is_none")]
    pub nfc: Option<f64>,
    #[serde(rename = "NAC", default, skip_serializing_if = "Option::is_none")]
    pub nac: Option<f64>,
    #[serde(rename = "GERAL", default, skip_serializing_if = "Option::is_none")]
    pub geral: Option<f64>,
}

impl DimensionScore {
    pub fn get(&self, dimension: Dimension) -> Option<f64> {
        match dimension {
            Dimension::Noc => self.noc,
            Dimension::Nfc => self.nfc,
            Dimension::Nac => self.nac,
            Dimension::Geral => self.geral,
        }
    }

    pub fn set(&mut self, dimension: Dimension, value: Option<f64>) {
        match dimension {
            Dimension::Noc => self.noc = value,
            Dimension::Nfc => self.nfc = value,
            Dimension::Nac => self.nac = value,
            Dimension::Geral => self.geral = value,
        }
    }
}

/// Scores of the four aggregation tiers side by side
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelComparison {
    #[serde(rename = "UNIFOR")]
    pub unifor: DimensionScore,
    #[serde(rename = "CEARA")]
    pub ceara: DimensionScore,
    #[serde(rename = "NORDESTE")]
    pub nordeste: DimensionScore,
    #[serde(rename = "BRASIL")]
    pub brasil: DimensionScore,
}

impl LevelComparison {
    pub fn get(&self, level: InstitutionLevel) -> &DimensionScore {
        match level {
            InstitutionLevel::Unifor => &self.unifor,
            InstitutionLevel::Ceara => &self.ceara,
            InstitutionLevel::Nordeste => &self.nordeste,
            InstitutionLevel::Brasil => &self.brasil,
        }
    }
}

/// One academic area of the subject institution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub area: String,
    #[serde(default)]
    pub noc: Option<f64>,
    #[serde(default)]
    pub nfc: Option<f64>,
    #[serde(default)]
    pub nac: Option<f64>,
    #[serde(default)]
    pub media_geral: Option<f64>,
}

impl CourseRecord {
    pub fn score(&self, dimension: Dimension) -> Option<f64> {
        match dimension {
            Dimension::Noc => self.noc,
            Dimension::Nfc => self.nfc,
            Dimension::Nac => self.nac,
            Dimension::Geral => self.media_geral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPerformer {
    pub institution: String,
    pub score: f64,
}

/// A survey question flagged as relevant for improvement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionPriority {
    pub question: String,
    #[serde(default)]
    pub dimension: String,
    pub unifor_score: f64,
    pub national_mean: f64,
    #[serde(default)]
    pub gap_to_mean: Option<f64>,
    #[serde(default)]
    pub percentile_rank: Option<f64>,
    #[serde(default)]
    pub top_performer: Option<TopPerformer>,
}

impl QuestionPriority {
    /// Distance to the national mean; positive means the subject is ahead
    pub fn gap(&self) -> f64 {
        self.unifor_score - self.national_mean
    }
}

/// `(institution, score)` pairs per question, lowest and highest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtremesResult {
    pub menores: BTreeMap<String, Vec<(String, f64)>>,
    pub maiores: BTreeMap<String, Vec<(String, f64)>>,
}

/// Institution name → dimension scores
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstitutionalComparison(pub BTreeMap<String, DimensionScore>);

impl InstitutionalComparison {
    pub fn iter(&self) -> impl Iterator<Item = (&String, &DimensionScore)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Areas {
    #[serde(default)]
    pub all_areas: Vec<String>,
    #[serde(default, alias = "areas")]
    pub unifor_areas: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub total_courses: u64,
    #[serde(default)]
    pub unifor_courses: u64,
    #[serde(default)]
    pub unifor_areas: u64,
}

/// Payload of `dashboard-data`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub summary: Summary,
    #[serde(default)]
    pub comparison_chart: LevelComparison,
    #[serde(default)]
    pub unifor_performance: Vec<CourseRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UniforAnalysis {
    pub scores: DimensionScore,
    pub courses: Vec<CourseRecord>,
}

/// Payload of `comprehensive-analysis`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComprehensiveAnalysis {
    pub unifor_analysis: UniforAnalysis,
    pub institutional_comparison: InstitutionalComparison,
    pub improvement_priorities: Vec<QuestionPriority>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrioritiesResponse {
    #[serde(default)]
    pub priorities: Vec<QuestionPriority>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimilarInstitutions {
    #[serde(default)]
    pub institutions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionInfo {
    pub name: String,
    #[serde(default)]
    pub questions: Vec<String>,
}

/// Payload of `metadata`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub total_courses: u64,
    pub unifor_courses: u64,
    pub course_areas: Vec<String>,
    pub unifor_areas: Vec<String>,
    pub dimensions: BTreeMap<String, DimensionInfo>,
}

/// A subject-institution course as stored by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UniforCourse {
    pub codigo: Option<i64>,
    pub area: String,
    pub participantes: Option<f64>,
    pub percentual_participacao: Option<f64>,
    pub media_geral: Option<f64>,
    pub scores: DimensionScore,
    pub questions: BTreeMap<String, f64>,
}

/// Payload of `course-detail`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseDetail {
    pub course: UniforCourse,
    pub extremes: ExtremesResult,
    pub comparison: LevelComparison,
}

/// Invariant checks run on every payload at the fetch boundary
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

fn check_score(what: &str, value: f64) -> Result<(), String> {
    if !value.is_finite() || !(SCORE_MIN..=SCORE_MAX).contains(&value) {
        return Err(format!("{} = {} is outside [{}, {}]", what, value, SCORE_MIN, SCORE_MAX));
    }
    Ok(())
}

fn check_optional(what: &str, value: Option<f64>) -> Result<(), String> {
    value.map_or(Ok(()), |v| check_score(what, v))
}

impl Validate for DimensionScore {
    fn validate(&self) -> Result<(), String> {
        for dim in Dimension::ALL {
            check_optional(dim.code(), self.get(dim))?;
        }
        Ok(())
    }
}

impl Validate for LevelComparison {
    fn validate(&self) -> Result<(), String> {
        for level in InstitutionLevel::ALL {
            self.get(level)
                .validate()
                .map_err(|e| format!("{}: {}", level, e))?;
        }
        Ok(())
    }
}

impl Validate for CourseRecord {
    fn validate(&self) -> Result<(), String> {
        for dim in Dimension::ALL {
            check_optional(&format!("{} {}", self.area, dim), self.score(dim))?;
        }
        Ok(())
    }
}

impl Validate for QuestionPriority {
    fn validate(&self) -> Result<(), String> {
        check_score(&format!("{} unifor_score", self.question), self.unifor_score)?;
        check_score(&format!("{} national_mean", self.question), self.national_mean)?;
        if let Some(gap) = self.gap_to_mean {
            if (gap - self.gap()).abs() > GAP_TOLERANCE {
                return Err(format!(
                    "{} gap_to_mean {} does not match unifor_score - national_mean = {}",
                    self.question,
                    gap,
                    self.gap()
                ));
            }
        }
        if let Some(rank) = self.percentile_rank {
            if !(0.0..=100.0).contains(&rank) {
                return Err(format!("{} percentile_rank {} is outside [0, 100]", self.question, rank));
            }
        }
        if let Some(top) = &self.top_performer {
            check_score(&format!("{} top performer", self.question), top.score)?;
        }
        Ok(())
    }
}

impl Validate for ExtremesResult {
    fn validate(&self) -> Result<(), String> {
        for (side, table) in [("menores", &self.menores), ("maiores", &self.maiores)] {
            for (question, entries) in table {
                if question_number(question).is_none() {
                    return Err(format!("{} has unexpected question id {:?}", side, question));
                }
                for (institution, score) in entries {
                    check_score(&format!("{} {} {}", side, question, institution), *score)?;
                }
            }
        }
        Ok(())
    }
}

impl Validate for InstitutionalComparison {
    fn validate(&self) -> Result<(), String> {
        for (institution, scores) in self.iter() {
            scores.validate().map_err(|e| format!("{}: {}", institution, e))?;
        }
        Ok(())
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), String> {
        self.iter().try_for_each(Validate::validate)
    }
}

impl Validate for Areas {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Validate for DashboardData {
    fn validate(&self) -> Result<(), String> {
        self.comparison_chart.validate()?;
        self.unifor_performance.validate()
    }
}

impl Validate for ComprehensiveAnalysis {
    fn validate(&self) -> Result<(), String> {
        self.unifor_analysis.scores.validate()?;
        self.unifor_analysis.courses.validate()?;
        self.institutional_comparison.validate()?;
        self.improvement_priorities.validate()
    }
}

impl Validate for PrioritiesResponse {
    fn validate(&self) -> Result<(), String> {
        self.priorities.validate()
    }
}

impl Validate for SimilarInstitutions {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Validate for Metadata {
    fn validate(&self) -> Result<(), String> {
        for (code, info) in &self.dimensions {
            if let Some(bad) = info.questions.iter().find(|q| question_number(q).is_none()) {
                return Err(format!("dimension {} lists unexpected question id {:?}", code, bad));
            }
        }
        Ok(())
    }
}

impl Validate for CourseDetail {
    fn validate(&self) -> Result<(), String> {
        check_optional("media_geral", self.course.media_geral)?;
        self.course.scores.validate()?;
        for (question, score) in &self.course.questions {
            check_score(question, *score)?;
        }
        self.extremes.validate()?;
        self.comparison.validate()
    }
}
