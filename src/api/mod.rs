//! Backend API - typed payloads and the HTTP fetch layer

pub mod client;
pub mod schema;

pub use client::{ApiClient, Endpoint};
pub use schema::{
    Areas, ComprehensiveAnalysis, CourseDetail, CourseRecord, DashboardData, Dimension,
    DimensionInfo, DimensionScore, ExtremesResult, InstitutionLevel, InstitutionalComparison,
    LevelComparison, Metadata, PrioritiesResponse, QuestionPriority, SimilarInstitutions, Summary,
    TopPerformer, UniforAnalysis, UniforCourse, Validate, SCORE_MAX, SCORE_MIN,
};
