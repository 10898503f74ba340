use crate::models::domain::{Question, Quiz, QuizDuration};

/// Stored text is sanitized before it is placed in a page: safe inline markup
/// survives, scripts and event attributes do not.
fn clean(input: &str) -> String {
    ammonia::clean(input)
}

/// Formats a duration as `H:M:S` without zero padding.
pub fn format_duration(duration: &QuizDuration) -> String {
    format!("{}:{}:{}", duration.hours, duration.minutes, duration.seconds)
}

/// One entry per quiz, in the order given.
pub fn render_quiz_index(quizzes: &[Quiz]) -> String {
    quizzes
        .iter()
        .map(|quiz| {
            format!(
                "<b>Name: </b>{}<br><b>id:</b> {}<br><hr>",
                clean(&quiz.name),
                quiz.id
            )
        })
        .collect()
}

/// Renders the quiz header followed by its enabled questions. Numbering
/// counts only the questions that are shown.
pub fn render_quiz(quiz: &Quiz) -> String {
    let mut html = format!(
        "<p style=\"text-align:center\"><b>{}</b></p><b>Instructions:</b> {}<br><b>Duration:</b> {}<hr>",
        clean(&quiz.name),
        clean(&quiz.instructions),
        format_duration(&quiz.duration)
    );

    let enabled = quiz.questions.iter().filter(|q| q.is_enabled);
    for (index, question) in enabled.enumerate() {
        html.push_str(&render_question(index + 1, question));
    }

    html
}

fn render_question(number: usize, question: &Question) -> String {
    let mut html = format!(
        "{}. {} - {}<br><div style=\"margin:10px\">",
        number,
        clean(&question.question),
        question.id
    );

    for answer in &question.answers {
        html.push_str(&clean(&answer.option));
        html.push_str("<br>");
    }

    html.push_str(&format!(
        "</div><b>Answer:</b> {}<br><b>Explanation:</b> {}<br><hr>",
        clean(&question.answer),
        clean(&question.explanation)
    ));

    html
}
