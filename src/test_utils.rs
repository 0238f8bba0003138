#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{AnswerOption, Course, Question, Slide};

    /// A four-option question whose correct option sits at `correct_index`.
    pub fn test_question(id: u32, correct_index: usize) -> Question {
        Question {
            id,
            text: format!("Question {}", id),
            options: (0..4)
                .map(|i| AnswerOption {
                    text: format!("Option {}", i + 1),
                    is_correct: i == correct_index,
                })
                .collect(),
            explanation: format!("Explanation for question {}", id),
        }
    }

    /// A bank of `count` valid questions with varying correct indices.
    pub fn test_bank(count: u32) -> Vec<Question> {
        (0..count)
            .map(|i| test_question(i + 1, (i % 4) as usize))
            .collect()
    }

    pub fn test_course(slides: usize) -> Course {
        Course {
            title: "Test Course".to_string(),
            description: "A course for tests".to_string(),
            slides: (0..slides)
                .map(|i| Slide {
                    id: i as u32 + 1,
                    title: format!("Slide {}", i + 1),
                    content: format!("Content for slide {}", i + 1),
                    key_points: vec![format!("Key point {}", i + 1)],
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_test_question() {
        let question = test_question(3, 2);
        assert_eq!(question.id, 3);
        assert_eq!(question.correct_index(), Some(2));
        assert!(question.validate().is_ok());
    }

    #[test]
    fn test_fixtures_test_bank() {
        let bank = test_bank(20);
        assert_eq!(bank.len(), 20);
        assert!(bank.iter().all(|q| q.validate().is_ok()));
    }

    #[test]
    fn test_fixtures_test_course() {
        let course = test_course(5);
        assert_eq!(course.slide_count(), 5);
    }
}
