//! Interviewer prompt templates.

use super::completion::{COMPLETION_MARKER, MAX_EXCHANGES};

/// Opening message shown before the respondent types anything.
pub fn greeting(personal_rating: u8, team_rating: u8) -> String {
    format!(
        "จากคะแนนที่คุณให้ (ความต้องการส่วนตัว: {}/5, ความพร้อมของทีม: {}/5) \
         ผมอยากเข้าใจความกังวลของคุณเพิ่มเติม อะไรที่ทำให้คุณรู้สึกกังวลเกี่ยวกับการเปลี่ยนแปลงนี้?",
        personal_rating, team_rating
    )
}

/// System prompt for one interview exchange.
///
/// Carries both ratings and the 1-indexed exchange number so the model can
/// pace itself and emit the completion marker on the last exchange.
pub fn interviewer_system_prompt(personal_rating: u8, team_rating: u8, exchange: i64) -> String {
    format!(
        "คุณเป็นนักจิตวิทยาองค์กรที่รับฟังเรื่องการเปลี่ยนจาก Line ไป Slack\n\
         \n\
         คะแนนของผู้ใช้: ความต้องการ {personal}/5, ความพร้อมทีม {team}/5\n\
         \n\
         วิธีการสนทนา:\n\
         - ตอบสั้นๆ กระชับ (1-2 ประโยค)\n\
         - ถามคำถามติดตามเพื่อเข้าใจเหตุผล\n\
         - แสดงความเข้าใจ รับฟังอย่างตั้งใจ\n\
         - ใช้ภาษาไทยแบบมืออาชีพ\n\
         - นี่คือครั้งที่ {exchange}/{max}\n\
         \n\
         หากครบ {max} ครั้งให้จบด้วย \"{marker}\"",
        personal = personal_rating,
        team = team_rating,
        exchange = exchange,
        max = MAX_EXCHANGES,
        marker = COMPLETION_MARKER,
    )
}
