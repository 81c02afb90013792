use crate::footer;
use crate::models::DailyChallenge;

pub fn display_challenge(challenge: &DailyChallenge) {
    println!("\n{}", "=".repeat(60));
    println!("  PYTHON LEARNING ARENA - Daily Challenge");
    println!("{}\n", "=".repeat(60));

    println!("Date:       {}", challenge.challenge_date);
    println!("Challenge:  {}", challenge.id);
    println!("Difficulty: {}", challenge.difficulty);
    println!("Bonus XP:   +{}", challenge.bonus_xp);

    match &challenge.problem {
        Some(problem) => match problem.title() {
            Some(title) => println!("Problem:    {} ({})", title, problem.id),
            None => println!("Problem:    {}", problem.id),
        },
        None => println!("Problem:    {}", challenge.problem_id),
    }

    println!("\nScheduled at {}\n", challenge.created_at);
    footer::print();
}

pub fn display_missing(date: &str) {
    println!("\nNo challenge is scheduled for {}.\n", date);
    footer::print();
}
