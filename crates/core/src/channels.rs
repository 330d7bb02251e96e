//! Live TV channel catalog.
//!
//! The catalog is fixed at build time; stream links point at third-party
//! HLS playlists.

use serde::Serialize;

use crate::error::CoreError;

/// One live channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiveChannel {
    pub channel_id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub stream_link: &'static str,
    pub logo: &'static str,
    pub is_live: bool,
}

static CHANNELS: [LiveChannel; 5] = [
    LiveChannel {
        channel_id: "ch3",
        name: "ช่อง 3 HD",
        description: "สถานีโทรทัศน์ไทยทีวีสีช่อง 3",
        stream_link: "https://p1.cdn.vet/live/ch3/i/ch3i.m3u8?sid=b5yMjYzMjE5YjI4YmVkNWZhYzE5ZQNGVkZWI2NzE0YzEwZDdm",
        logo: "/static/img/3hd.png",
        is_live: true,
    },
    LiveChannel {
        channel_id: "ch5",
        name: "ช่อง 5 HD",
        description: "สถานีโทรทัศน์ไทยทีวีสีช่อง 5",
        stream_link: "https://p1.cdn.vet/live/ch5/i/ch5i.m3u8?sid=b5yMjYzMjE5YjI4YmVkNWZhYzE5ZQNGVkZWI2NzE0YzEwZDdm",
        logo: "/static/img/channel5.png",
        is_live: true,
    },
    LiveChannel {
        channel_id: "ch7",
        name: "ช่อง 7 HD",
        description: "สถานีโทรทัศน์ไทยทีวีสีช่อง 7",
        stream_link: "http://edge2a.v2h-cdn.com/hd_7/7hd.stream/playlist.m3u8",
        logo: "/static/img/ch7-hd.png",
        is_live: true,
    },
    LiveChannel {
        channel_id: "mcot",
        name: "MCOT HD",
        description: "สถานีโทรทัศน์ไทยทีวีสีช่อง MCOT",
        stream_link: "https://p1.cdn.vet/live/ch9/i/ch9i.m3u8?sid=b5yMzA2OTJkMDNjOTg0YmY2NmZhMwNzdlZGQ4NzAzOTg3ZGNh",
        logo: "/static/img/mcot-hd.png",
        is_live: true,
    },
    LiveChannel {
        channel_id: "thaipbs",
        name: "ไทยพีบีเอส HD",
        description: "สถานีโทรทัศน์ไทยพีบีเอส",
        stream_link: "https://edge2a.v2h-cdn.com/tpbs/tpbs.stream/playlist.m3u8",
        logo: "/static/img/thaipbs.png",
        is_live: true,
    },
];

/// Every channel, in display order.
pub fn all_channels() -> &'static [LiveChannel] {
    &CHANNELS
}

/// Look up a channel by id.
pub fn find_channel(channel_id: &str) -> Result<&'static LiveChannel, CoreError> {
    CHANNELS
        .iter()
        .find(|c| c.channel_id == channel_id)
        .ok_or_else(|| CoreError::UnknownChannel(channel_id.to_string()))
}
