use std::sync::Arc;

use axum::{extract::State, Json};
use moexmap_market_data::{BoardSpec, HeatmapTile, IssClient};
use serde::Serialize;

use crate::main_lib::AppState;

/// Tiles for one board, or its isolated failure.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardHeatmap {
    pub board: String,
    pub tiles: Vec<HeatmapTile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize)]
pub struct HeatmapResponse {
    pub shares: BoardHeatmap,
    pub futures: BoardHeatmap,
}

/// Render both board heatmaps.
///
/// One client is constructed per render and dropped with it. The two
/// board pipelines run jointly but fail independently: a failing board
/// degrades to an empty tile list with an error string while the other
/// still renders.
pub async fn get_heatmap(State(state): State<Arc<AppState>>) -> Json<HeatmapResponse> {
    let client = IssClient::with_base_url(&state.iss_base_url);

    let (shares, futures) = tokio::join!(
        board_heatmap(&state, &client, &state.shares),
        board_heatmap(&state, &client, &state.futures),
    );

    Json(HeatmapResponse { shares, futures })
}

async fn board_heatmap(
    state: &AppState,
    client: &IssClient,
    spec: &BoardSpec,
) -> BoardHeatmap {
    match client.get_board_quotes(spec).await {
        Ok(quotes) => BoardHeatmap {
            board: spec.board.clone(),
            tiles: state.painter.tiles(&quotes, state.tile_limit),
            error: None,
        },
        Err(e) => {
            tracing::warn!("heatmap fetch failed for board {}: {}", spec.board, e);
            BoardHeatmap {
                board: spec.board.clone(),
                tiles: Vec::new(),
                error: Some(e.to_string()),
            }
        }
    }
}
