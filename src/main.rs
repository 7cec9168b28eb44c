use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use brightbook_client::{
    app_state::AppState,
    config::Config,
    errors::{AppError, AppResult, ErrorReport},
    models::domain::{LetterHunt, MatchOutcome, PhonicsMatch, PickOutcome, QuizPhase, SessionContext},
    services::{QuizController, SubmissionOutcome},
    views::{QuestionView, ResultsView},
};

type Input = Lines<BufReader<Stdin>>;

const BOARD_COLUMNS: usize = 4;

#[tokio::main]
async fn main() {
    let config = Config::from_env();
    env_logger::Builder::new()
        .parse_filters(&config.rust_log)
        .init();

    if let Err(err) = run(config).await {
        let report = ErrorReport::from(&err);
        log::error!(
            "{}",
            serde_json::to_string(&report).unwrap_or_else(|_| report.error.clone())
        );
        std::process::exit(1);
    }
}

async fn run(config: Config) -> AppResult<()> {
    if let Err(err) = config.validate_for_production() {
        log::warn!("{}", err);
    }

    let mut args = std::env::args().skip(1);
    let mode = args.next();
    let activity_id = args.next().and_then(|id| id.parse::<i64>().ok());

    let state = AppState::new(config)?;
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    let child_id = match state.config.child_id {
        Some(id) => id,
        None => prompt_child_id(&mut input).await?,
    };
    let context = SessionContext::new(child_id)?;

    match mode.as_deref() {
        Some("letter-hunt") => play_letter_hunt(&state, &context, activity_id, &mut input).await,
        Some("phonics-match") => {
            play_phonics_match(&state, &context, activity_id, &mut input).await
        }
        None | Some("assessment") => run_assessment(&state, context, &mut input).await,
        Some(other) => Err(AppError::ConfigurationError(format!(
            "unknown mode '{}', expected 'assessment', 'letter-hunt' or 'phonics-match'",
            other
        ))),
    }
}

async fn prompt_child_id(input: &mut Input) -> AppResult<i64> {
    loop {
        println!("Child id:");
        let Some(line) = input.next_line().await? else {
            return Err(AppError::ConfigurationError(
                "no child id given and BRIGHTBOOK_CHILD_ID is not set".to_string(),
            ));
        };
        match line.trim().parse::<i64>() {
            Ok(id) if id > 0 => return Ok(id),
            _ => println!("Please enter a positive number."),
        }
    }
}

async fn run_assessment(
    state: &AppState,
    context: SessionContext,
    input: &mut Input,
) -> AppResult<()> {
    let mut quiz = state.new_assessment(context)?;

    loop {
        while quiz.phase() == QuizPhase::InProgress {
            let Some(option_id) = ask_current_question(&quiz, input).await? else {
                break;
            };

            match state.assessment_service.answer(&mut quiz, &option_id).await? {
                SubmissionOutcome::Advanced { .. } => {}
                SubmissionOutcome::Completed(_) => break,
                SubmissionOutcome::Failed { message, error } => {
                    log::warn!("Assessment submission failed: {}", error);
                    println!("{}", message);
                    println!("Press enter to send again, or pick an answer to change it.");
                }
            }
        }

        let result = quiz.take_result();
        println!("{}", ResultsView::render(result.as_ref()));

        let next = ResultsView::next_action(result.as_ref());
        if !next.restarts_quiz() || !confirm(input, next.label()).await? {
            return Ok(());
        }
        quiz.start();
    }
}

async fn confirm(input: &mut Input, action: &str) -> AppResult<bool> {
    println!("{}? [y/N]", action);
    let Some(line) = input.next_line().await? else {
        return Ok(false);
    };
    Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

/// Shows the current question until the child picks an option. `None` means
/// they quit.
async fn ask_current_question(quiz: &QuizController, input: &mut Input) -> AppResult<Option<String>> {
    let Some(mut view) = QuestionView::for_controller(quiz) else {
        return Ok(None);
    };
    println!("{}", view.render());

    loop {
        let Some(line) = input.next_line().await? else {
            return Ok(None);
        };
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        if line.is_empty() && quiz.submission_attempts() > 0 {
            if let Some(previous) = quiz.record().selected(view.question().id) {
                return Ok(Some(previous.to_string()));
            }
        }
        if let Some(option_id) = view.select_input(line) {
            return Ok(Some(option_id));
        }
        println!("Pick one of the numbered answers (or q to quit).");
    }
}

async fn play_letter_hunt(
    state: &AppState,
    context: &SessionContext,
    activity_id: Option<i64>,
    input: &mut Input,
) -> AppResult<()> {
    let mut rng = StdRng::from_entropy();
    let mut game = state.letter_hunt_service.new_game(&mut rng);

    while !game.finished {
        println!("{}", render_board(&game));
        let Some(line) = input.next_line().await? else {
            return Ok(());
        };
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            return Ok(());
        }
        let Some(tile) = line
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| game.tiles.get(index))
        else {
            println!("Pick a tile number from the board.");
            continue;
        };
        let tile_id = tile.id;

        match state
            .letter_hunt_service
            .pick(&mut game, tile_id, context, activity_id)
            .await
        {
            PickOutcome::Found { remaining } => println!("Found one! {} to go.", remaining),
            PickOutcome::Miss => println!("Oops, that's not {}.", game.target),
            PickOutcome::AlreadyFound => println!("You already found that one."),
            PickOutcome::Won { final_score } => println!("You found them all! Score: {}", final_score),
            PickOutcome::GameOver => break,
        }
    }

    Ok(())
}

async fn play_phonics_match(
    state: &AppState,
    context: &SessionContext,
    activity_id: Option<i64>,
    input: &mut Input,
) -> AppResult<()> {
    let mut game = state.phonics_match_service.new_game()?;

    while !game.finished {
        println!("{}", render_round(&game));
        let Some(line) = input.next_line().await? else {
            return Ok(());
        };
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            return Ok(());
        }
        if line.eq_ignore_ascii_case("r") {
            game.reset(state.clock.now());
            continue;
        }
        let Some(option_id) = line
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| game.current_round()?.options.get(index))
            .map(|option| option.id.clone())
        else {
            println!("Pick a picture number (r restarts, q quits).");
            continue;
        };

        match state
            .phonics_match_service
            .choose(&mut game, &option_id, context, activity_id)
            .await?
        {
            MatchOutcome::Correct { points } => {
                println!("Great job! +{}", points);
                game.advance();
            }
            MatchOutcome::Wrong => println!("Not quite, listen again and try another picture."),
            MatchOutcome::Locked => {}
            MatchOutcome::Completed { final_score } => {
                println!("All rounds done! Score: {}", final_score)
            }
            MatchOutcome::GameOver => break,
        }
    }

    Ok(())
}

fn render_round(game: &PhonicsMatch) -> String {
    let Some(round) = game.current_round() else {
        return format!("Score: {}", game.score);
    };
    let options: Vec<String> = round
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| match &option.label {
            Some(label) => format!("[{}] {} {}", i + 1, option.text, label),
            None => format!("[{}] {}", i + 1, option.text),
        })
        .collect();
    format!(
        "Round {} of {}  Score: {}\n{} says \"{}\"\n{}\n  {}\n",
        game.round_index + 1,
        game.round_count(),
        game.score,
        round.letter,
        round.sound,
        round.prompt,
        options.join("   ")
    )
}

fn render_board(game: &LetterHunt) -> String {
    let mut out = format!(
        "Find all the letter {}!  Score: {}  Found: {}/{}\n",
        game.target,
        game.score,
        game.found_count(),
        game.found_count() + game.remaining()
    );
    for (row, tiles) in game.tiles.chunks(BOARD_COLUMNS).enumerate() {
        let cells: Vec<String> = tiles
            .iter()
            .enumerate()
            .map(|(col, tile)| {
                let number = row * BOARD_COLUMNS + col + 1;
                if tile.found {
                    format!("{:>2}: *", number)
                } else {
                    format!("{:>2}: {}", number, tile.letter)
                }
            })
            .collect();
        out.push_str(&cells.join("   "));
        out.push('\n');
    }
    out
}
