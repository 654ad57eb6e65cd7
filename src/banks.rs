//! Built-in question banks and facts for each tier.

use crate::question::{Fact, Question, QuestionBank};

fn choice(bank: &mut QuestionBank, prompt: &str, options: &[&str], correct: usize, points: i32) {
    let options: Vec<String> = options.iter().map(|o| o.to_string()).collect();
    let expected = options[correct].clone();
    bank.add(Question::new(prompt, options, correct, points), &expected);
}

pub fn basic() -> QuestionBank {
    let mut bank = QuestionBank::new()
        // vocabulary
        .with_free_text("Translate 'gato' into English:", 10, "cat")
        .with_free_text("Translate 'perro' into English:", 10, "dog")
        .with_free_text("Translate 'pajaro' into English:", 10, "bird")
        .with_free_text("Translate 'caballo' into English:", 10, "horse")
        .with_free_text("What colour is the sky on a clear day?", 10, "blue")
        .with_free_text("Translate 'rojo' into English:", 10, "red")
        .with_free_text("Translate 'casa' into English:", 10, "house")
        .with_free_text("Translate 'agua' into English:", 10, "water")
        .with_free_text("Translate 'luna' into English:", 10, "moon")
        // arithmetic
        .with_free_text("How much is 5 + 3?", 15, "8")
        .with_free_text("How much is 10 - 3?", 15, "7")
        .with_free_text("Next in the series 2, 4, 6, 8, ?", 15, "10")
        .with_free_text("How many sides does a triangle have?", 15, "3")
        // trivia
        .with_free_text("What is the capital of France?", 20, "paris")
        .with_free_text("How many planets are in the solar system?", 20, "8")
        .with_free_text("In which year did people first land on the Moon?", 20, "1969");
    choice(&mut bank, "Which one is a fruit?", &["apple", "chair", "river"], 0, 10);
    choice(&mut bank, "How many continents are there?", &["5", "6", "7"], 2, 20);
    bank
}

pub fn intermediate() -> QuestionBank {
    QuestionBank::new()
        .with_free_text("Translate 'casa' into English (text):", 12, "house")
        .with_free_text("Write the infinitive of 'corre' in English (text):", 12, "run")
        .with_free_text("Translate 'agua' into English (text):", 12, "water")
}

pub fn advanced() -> QuestionBank {
    let mut bank = QuestionBank::new()
        .with_free_text("Translate 'desafio' into English:", 15, "challenge")
        .with_free_text("Translate 'conocimiento' into English:", 15, "knowledge")
        .with_free_text("How do you say 'buenas noches' in English?", 15, "good night")
        .with_free_text("Past tense of 'write':", 15, "wrote")
        .with_free_text("Past participle of 'see':", 15, "seen")
        .with_free_text("Solve for x: 2x + 5 = 15", 20, "5")
        .with_free_text("Square root of 144:", 20, "12")
        .with_free_text("What is 30% of 200?", 20, "60")
        .with_free_text("Sum of the interior angles of a triangle, in degrees:", 20, "180")
        .with_free_text("Who developed the theory of relativity?", 25, "einstein")
        .with_free_text("How many bones are in the adult human body?", 25, "206")
        .with_free_text("Highest mountain in the world:", 25, "everest");
    choice(&mut bank, "Which gas do plants absorb?", &["oxygen", "carbon dioxide", "helium"], 1, 25);
    bank
}

pub fn legend() -> QuestionBank {
    let mut bank = QuestionBank::new()
        .with_free_text("Translate 'efimero' into English:", 20, "ephemeral")
        .with_free_text("Translate 'paradoja' into English:", 20, "paradox")
        .with_free_text("Translate 'elocuencia' into English:", 20, "eloquence")
        .with_free_text("Idiom for starting a conversation with strangers: to break the ...", 20, "ice")
        .with_free_text("Past participle of 'forsake':", 25, "forsaken")
        .with_free_text("Derivative of x^2 with respect to x:", 25, "2x")
        .with_free_text("Smallest prime number greater than 20:", 25, "23")
        .with_free_text("Chemical symbol for gold:", 30, "au")
        .with_free_text("Year the Western Roman Empire fell:", 30, "476")
        .with_free_text("Number of chromosomes in a human cell:", 30, "46")
        .with_free_text("Author of 'One Hundred Years of Solitude':", 30, "garcia marquez");
    choice(&mut bank, "Which planet has the shortest day?", &["Mars", "Jupiter", "Venus"], 1, 30);
    bank
}

pub fn facts() -> Vec<Fact> {
    vec![
        Fact::new("Octopus hearts", "An octopus has three hearts and blue blood.", "Science"),
        Fact::new("Shortest war", "The Anglo-Zanzibar war of 1896 lasted under an hour.", "History"),
        Fact::new("Most spoken", "English has the most speakers when learners are counted.", "Languages"),
        Fact::new("Honey", "Sealed honey can stay edible for thousands of years.", "Science"),
        Fact::new("Zero", "Brahmagupta wrote down rules for arithmetic with zero in 628.", "Mathematics"),
        Fact::new("Amazon", "Most of the Amazon rainforest lies in Brazil.", "Geography"),
    ]
}
