// All LLM prompt constants for the suggestion generator.

/// Suggestion prompt template. Replace `{cv_text}` before sending.
/// Demands a bare JSON array so the extractor has something to find.
pub const SUGGESTIONS_PROMPT_TEMPLATE: &str = r#"Dựa trên thông tin CV sau đây, hãy tạo ra 10 câu hỏi gợi ý thú vị và đa dạng mà người dùng có thể hỏi về CV này.

CV Information:
{cv_text}

Yêu cầu:
- Tạo đúng 10 câu hỏi
- Câu hỏi phải đa dạng: kỹ năng, kinh nghiệm, dự án, mục tiêu, học vấn, sở thích, v.v.
- Câu hỏi ngắn gọn, rõ ràng, hấp dẫn
- Bằng tiếng Việt
- Trả về ĐÚNG FORMAT JSON: ["câu hỏi 1", "câu hỏi 2", ...]
- KHÔNG thêm bất kỳ text nào khác ngoài JSON array"#;
