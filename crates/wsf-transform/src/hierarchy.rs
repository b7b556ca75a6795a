//! Session -> student -> assessment grouping.

use std::time::Instant;

use indexmap::IndexMap;
use tracing::{debug, info};

use wsf_model::{Assessment, ResponseRecord, Session, Student};

type AssessmentGroups = IndexMap<String, Vec<ResponseRecord>>;
type StudentGroups = IndexMap<String, AssessmentGroups>;

/// Groups records into sessions in a single pass.
///
/// Every level keeps first-seen order from the input; nothing is sorted.
/// Each session's domain map is populated once its tree is complete.
pub fn build_sessions(records: Vec<ResponseRecord>) -> Vec<Session> {
    let start = Instant::now();
    let mut grouped: IndexMap<String, StudentGroups> = IndexMap::new();
    for record in records {
        grouped
            .entry(record.session_id.clone())
            .or_default()
            .entry(record.student_guid.clone())
            .or_default()
            .entry(record.assessment_guid.clone())
            .or_default()
            .push(record);
    }

    let mut sessions = Vec::with_capacity(grouped.len());
    for (session_id, student_groups) in grouped {
        let students: Vec<Student> = student_groups
            .into_iter()
            .map(|(student_guid, assessment_groups)| Student {
                student_guid,
                assessments: assessment_groups
                    .into_values()
                    .filter_map(Assessment::from_records)
                    .collect(),
            })
            .collect();
        let mut session = Session::new(session_id, students);
        session.populate_domains();
        debug!(
            session_id = %session.session_id,
            student_count = session.students.len(),
            attempt_count = session.attempt_count(),
            domain_count = session.domains.len(),
            "built session"
        );
        sessions.push(session);
    }
    info!(
        session_count = sessions.len(),
        duration_ms = start.elapsed().as_millis(),
        "grouped responses into sessions"
    );
    sessions
}
