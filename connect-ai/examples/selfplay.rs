//! 自对弈示例
//!
//! 两个代理在默认 6x7 棋盘上对弈一局:
//! X 使用 Alpha-Beta 剪枝搜索，O 使用无剪枝 Minimax
//!
//! 运行方式:
//! ```bash
//! cargo run -p connect-ai --example selfplay
//! ```

use connect_ai::Agent;
use protocol::{BoardState, Mark};

fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut board = BoardState::default();
    let mut agent_x = Agent::with_defaults(Mark::X);
    let mut agent_o = Agent::with_defaults(Mark::O);

    let mut turn = Mark::X;
    while !board.check_win() && !board.check_full() {
        let column = match turn {
            Mark::X => agent_x.select_move_alpha_beta(&board),
            Mark::O => agent_o.select_move(&board),
        };
        board = board.apply(column, turn)?;
        println!("{} 落子列 {}:\n{}", turn, column, board);
        turn = turn.opponent();
    }

    if board.check_win() {
        // 获胜方即最近落子方
        match board.last_mark() {
            Some(mark) => println!("获胜方: {}", mark),
            None => println!("获胜方: ?"),
        }
    } else {
        println!("和棋");
    }

    let stats_x = agent_x.cache_stats();
    println!(
        "X: nodes={} prunes={} cache_entries={} hit_rate={:.2}",
        agent_x.nodes_expanded(),
        agent_x.prunes(),
        stats_x.entries,
        stats_x.hit_rate()
    );
    let stats_o = agent_o.cache_stats();
    println!(
        "O: nodes={} cache_entries={} hit_rate={:.2}",
        agent_o.nodes_expanded(),
        stats_o.entries,
        stats_o.hit_rate()
    );

    Ok(())
}
