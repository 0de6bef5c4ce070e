mod quiz_vm;
mod runner_vm;
mod setup_vm;

pub use quiz_vm::{
    AnswerButtonVm, GameOverVm, QuestionBoardVm, QuizIntent, answer_class, map_game_over,
    map_question_board,
};
pub use runner_vm::{RunnerStatsVm, map_runner_stats};
pub use setup_vm::{
    SetupVm, create_share_link, load_question_file, load_shared_game, map_setup,
};
