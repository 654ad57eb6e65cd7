use rand::seq::SliceRandom;
use rand::Rng;

/// A quiz question. With no options it is a free-text question whose expected
/// answer lives alongside it in the level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct: usize,
    points: u32,
}

impl Question {
    /// Negative point values are clamped to zero.
    pub fn new(prompt: impl Into<String>, options: Vec<String>, correct: usize, points: i32) -> Self {
        Self {
            prompt: prompt.into(),
            options,
            correct,
            points: points.max(0) as u32,
        }
    }

    /// Shorthand for a free-text question (no options, correct index 0).
    pub fn free_text(prompt: impl Into<String>, points: i32) -> Self {
        Self::new(prompt, Vec::new(), 0, points)
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_index(&self) -> usize {
        self.correct
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn is_free_text(&self) -> bool {
        self.options.is_empty()
    }

    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct
    }

    /// Text of the correct option, if this is a multiple-choice question.
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct).map(String::as_str)
    }
}

/// Normalisation applied to free-text answers on both sides of a comparison.
pub fn normalize_answer(text: &str) -> String {
    text.trim().to_lowercase()
}

#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    entries: Vec<(Question, String)>,
}

impl QuestionBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a question; the expected answer is stored trimmed and lowercased.
    pub fn add(&mut self, question: Question, expected: &str) {
        self.entries.push((question, normalize_answer(expected)));
    }

    /// Builder-style [`add`](Self::add) for free-text questions.
    pub fn with_free_text(mut self, prompt: &str, points: i32, expected: &str) -> Self {
        self.add(Question::free_text(prompt, points), expected);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.entries.iter().map(|(q, _)| q)
    }

    /// Every entry in insertion order, split like [`draw`](Self::draw).
    pub fn all(&self) -> (Vec<Question>, Vec<String>) {
        self.entries.iter().cloned().unzip()
    }

    /// Draws up to `count` entries without replacement. Both returned vectors
    /// follow the same shuffle order, so `answers[i]` belongs to `questions[i]`.
    pub fn draw(&self, rng: &mut impl Rng, count: usize) -> (Vec<Question>, Vec<String>) {
        let mut order: Vec<usize> = (0..self.entries.len()).collect();
        order.shuffle(rng);
        order
            .into_iter()
            .take(count)
            .map(|i| self.entries[i].clone())
            .unzip()
    }
}

/// A curiosity revealed on Info cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    pub title: String,
    pub description: String,
    pub category: String,
}

impl Fact {
    pub fn new(title: &str, description: &str, category: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
        }
    }
}

impl std::fmt::Display for Fact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.category, self.title, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;

    fn sample_bank() -> QuestionBank {
        QuestionBank::new()
            .with_free_text("Translate 'gato':", 10, "Cat")
            .with_free_text("Translate 'perro':", 10, "  DOG ")
            .with_free_text("Translate 'pez':", 10, "fish")
    }

    #[rstest]
    #[case(-5, 0)]
    #[case(0, 0)]
    #[case(15, 15)]
    fn points_are_clamped(#[case] given: i32, #[case] expected: u32) {
        assert_eq!(Question::free_text("q", given).points(), expected);
    }

    #[test]
    fn multiple_choice_checks_index() {
        let q = Question::new("2+2?", vec!["4".into(), "5".into()], 0, 10);
        assert!(q.is_correct(0));
        assert!(!q.is_correct(1));
        assert_eq!(q.correct_option(), Some("4"));
        assert!(!q.is_free_text());
    }

    #[test]
    fn expected_answers_are_normalized() {
        let bank = sample_bank();
        let mut rng = StdRng::seed_from_u64(0);
        let (_, answers) = bank.draw(&mut rng, 3);
        let mut sorted = answers.clone();
        sorted.sort();
        assert_eq!(sorted, vec!["cat", "dog", "fish"]);
    }

    #[test]
    fn draw_keeps_questions_and_answers_aligned() {
        let bank = sample_bank();
        let mut rng = StdRng::seed_from_u64(42);
        let (questions, answers) = bank.draw(&mut rng, 2);
        assert_eq!(questions.len(), 2);
        for (q, a) in questions.iter().zip(&answers) {
            let expected = match q.prompt() {
                "Translate 'gato':" => "cat",
                "Translate 'perro':" => "dog",
                "Translate 'pez':" => "fish",
                other => panic!("unexpected prompt {other}"),
            };
            assert_eq!(a, expected);
        }
        assert_ne!(questions[0], questions[1]);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(3, 3)]
    #[case(10, 3)]
    fn draw_caps_at_bank_size(#[case] asked: usize, #[case] got: usize) {
        let mut rng = StdRng::seed_from_u64(1);
        let (questions, answers) = sample_bank().draw(&mut rng, asked);
        assert_eq!(questions.len(), got);
        assert_eq!(answers.len(), got);
    }

    #[test]
    fn fact_display_includes_category() {
        let fact = Fact::new("Moon", "It drifts away about 3.8 cm a year.", "Science");
        assert_eq!(fact.to_string(), "[Science] Moon: It drifts away about 3.8 cm a year.");
    }
}
