use sea_orm::ConnectionTrait;
use trivia_backend::repos::questions::{self, NewQuestion, Question};
use trivia_backend::AppError;

pub const SCIENCE: i64 = 1;
pub const ART: i64 = 2;
pub const GEOGRAPHY: i64 = 3;
pub const HISTORY: i64 = 4;
pub const ENTERTAINMENT: i64 = 5;
pub const SPORTS: i64 = 6;

/// The classic sample bank, in insertion order. On a fresh database the
/// Geography questions land at positions 13, 14 and 15.
pub const SAMPLE_BANK: [(&str, &str, i32, i64); 19] = [
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 2, HISTORY),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 1, HISTORY),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 4, ENTERTAINMENT),
    ("What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 4, ENTERTAINMENT),
    ("What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 3, ENTERTAINMENT),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 3, SPORTS),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 4, SPORTS),
    ("Who invented Peanut Butter?", "George Washington Carver", 2, HISTORY),
    ("Which Dutch graphic artist-initials M C was a creator of optical illusions?", "Escher", 1, ART),
    ("La Giaconda is better known as what?", "Mona Lisa", 3, ART),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", 4, ART),
    ("Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?", "Jackson Pollock", 2, ART),
    ("What is the largest lake in Africa?", "Lake Victoria", 2, GEOGRAPHY),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, GEOGRAPHY),
    ("The Taj Mahal is located in which Indian city?", "Agra", 2, GEOGRAPHY),
    ("What is the heaviest organ in the human body?", "The Liver", 4, SCIENCE),
    ("Who discovered penicillin?", "Alexander Fleming", 3, SCIENCE),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 4, SCIENCE),
    ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, HISTORY),
];

pub async fn create_question(
    conn: &(impl ConnectionTrait + Send + Sync),
    question: &str,
    answer: &str,
    difficulty: i32,
    category: i64,
) -> Result<Question, AppError> {
    let new = NewQuestion {
        question: question.to_string(),
        answer: answer.to_string(),
        difficulty,
        category,
    };
    Ok(questions::create(conn, new).await?)
}

/// Insert [`SAMPLE_BANK`] and return the stored questions in order.
pub async fn seed_sample_bank(
    conn: &(impl ConnectionTrait + Send + Sync),
) -> Result<Vec<Question>, AppError> {
    let mut stored = Vec::with_capacity(SAMPLE_BANK.len());
    for (question, answer, difficulty, category) in SAMPLE_BANK {
        stored.push(create_question(conn, question, answer, difficulty, category).await?);
    }
    Ok(stored)
}

/// Insert `count` generated questions into `category`.
pub async fn seed_numbered(
    conn: &(impl ConnectionTrait + Send + Sync),
    count: usize,
    category: i64,
) -> Result<Vec<Question>, AppError> {
    let mut stored = Vec::with_capacity(count);
    for n in 0..count {
        stored.push(
            create_question(
                conn,
                &format!("Generated question number {n}?"),
                &format!("Answer {n}"),
                (n % 5) as i32 + 1,
                category,
            )
            .await?,
        );
    }
    Ok(stored)
}
