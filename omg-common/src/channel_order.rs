//! Pure channel reordering logic.
//!
//! Produces the full `Vec<ChannelOrder>` the reorder endpoint expects:
//! contiguous 1-based positions for every channel in the playlist, so the
//! server never ends up with gaps or duplicate positions.

use crate::models::{Channel, ChannelOrder};

/// Direction for a single-step move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Compute the new ordering after moving one channel a single step.
///
/// `channels` must be in display order. Returns `None` when the channel is
/// unknown or already at the boundary, in which case no request should be
/// issued.
pub fn move_channel(
    channels: &[&Channel],
    channel_id: i64,
    direction: MoveDirection,
) -> Option<Vec<ChannelOrder>> {
    let index = channels.iter().position(|c| c.id == channel_id)?;
    let target = match direction {
        MoveDirection::Up => index.checked_sub(1)?,
        MoveDirection::Down => {
            if index + 1 >= channels.len() {
                return None;
            }
            index + 1
        }
    };

    let mut ids: Vec<i64> = channels.iter().map(|c| c.id).collect();
    ids.swap(index, target);
    Some(renumber(&ids))
}

/// Compute the new ordering after moving one channel to an arbitrary index.
///
/// `to` is clamped to the list bounds. Returns `None` for an unknown id.
pub fn move_channel_to(
    channels: &[&Channel],
    channel_id: i64,
    to: usize,
) -> Option<Vec<ChannelOrder>> {
    let from = channels.iter().position(|c| c.id == channel_id)?;
    let mut ids: Vec<i64> = channels.iter().map(|c| c.id).collect();
    let id = ids.remove(from);
    let to = to.min(ids.len());
    ids.insert(to, id);
    Some(renumber(&ids))
}

/// Assign contiguous 1-based positions in the given order.
pub fn renumber(ids: &[i64]) -> Vec<ChannelOrder> {
    ids.iter()
        .enumerate()
        .map(|(i, &id)| ChannelOrder {
            id,
            position: (i + 1) as u32,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(id: i64, position: u32) -> Channel {
        Channel {
            id,
            playlist_id: 1,
            name: format!("Channel {id}"),
            url: format!("http://example.com/{id}"),
            group_title: None,
            logo_url: None,
            tvg_id: None,
            position: Some(position),
            extra_tags: Default::default(),
            created_at: None,
        }
    }

    #[test]
    fn test_move_up_swaps_with_previous() {
        let channels = [channel(1, 1), channel(2, 2), channel(3, 3)];
        let refs: Vec<&Channel> = channels.iter().collect();

        let orders = move_channel(&refs, 3, MoveDirection::Up).unwrap();
        assert_eq!(
            orders,
            vec![
                ChannelOrder { id: 1, position: 1 },
                ChannelOrder { id: 3, position: 2 },
                ChannelOrder { id: 2, position: 3 },
            ]
        );
    }

    #[test]
    fn test_move_down_swaps_with_next() {
        let channels = [channel(1, 1), channel(2, 2), channel(3, 3)];
        let refs: Vec<&Channel> = channels.iter().collect();

        let orders = move_channel(&refs, 1, MoveDirection::Down).unwrap();
        assert_eq!(
            orders,
            vec![
                ChannelOrder { id: 2, position: 1 },
                ChannelOrder { id: 1, position: 2 },
                ChannelOrder { id: 3, position: 3 },
            ]
        );
    }

    #[test]
    fn test_move_up_at_top_is_a_no_op() {
        let channels = [channel(1, 1), channel(2, 2)];
        let refs: Vec<&Channel> = channels.iter().collect();
        assert!(move_channel(&refs, 1, MoveDirection::Up).is_none());
    }

    #[test]
    fn test_move_down_at_bottom_is_a_no_op() {
        let channels = [channel(1, 1), channel(2, 2)];
        let refs: Vec<&Channel> = channels.iter().collect();
        assert!(move_channel(&refs, 2, MoveDirection::Down).is_none());
    }

    #[test]
    fn test_move_unknown_id() {
        let channels = [channel(1, 1)];
        let refs: Vec<&Channel> = channels.iter().collect();
        assert!(move_channel(&refs, 99, MoveDirection::Up).is_none());
        assert!(move_channel_to(&refs, 99, 0).is_none());
    }

    #[test]
    fn test_move_to_index_clamps_and_renumbers() {
        let channels = [channel(1, 1), channel(2, 2), channel(3, 3)];
        let refs: Vec<&Channel> = channels.iter().collect();

        let orders = move_channel_to(&refs, 1, 99).unwrap();
        assert_eq!(
            orders,
            vec![
                ChannelOrder { id: 2, position: 1 },
                ChannelOrder { id: 3, position: 2 },
                ChannelOrder { id: 1, position: 3 },
            ]
        );
    }

    #[test]
    fn test_positions_stay_contiguous_with_gapped_input() {
        // Server-side positions can have gaps after deletions.
        let channels = [channel(7, 3), channel(8, 9), channel(9, 20)];
        let refs: Vec<&Channel> = channels.iter().collect();

        let orders = move_channel(&refs, 9, MoveDirection::Up).unwrap();
        let positions: Vec<u32> = orders.iter().map(|o| o.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }
}
