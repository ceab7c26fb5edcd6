//! Built-in Font Awesome icon names offered for experiences and hobbies.

pub const EXPERIENCE_ICONS: &[&str] = &[
    "fa-solid fa-briefcase",
    "fa-solid fa-building",
    "fa-solid fa-laptop-code",
    "fa-solid fa-code",
    "fa-solid fa-microchip",
    "fa-solid fa-server",
    "fa-solid fa-database",
    "fa-solid fa-desktop",
    "fa-solid fa-user-tie",
    "fa-solid fa-handshake",
    "fa-solid fa-chart-line",
    "fa-solid fa-pen-nib",
];

pub const HOBBY_ICONS: &[&str] = &[
    "fa-solid fa-gamepad",
    "fa-solid fa-music",
    "fa-solid fa-book",
    "fa-solid fa-camera",
    "fa-solid fa-plane",
    "fa-solid fa-bicycle",
    "fa-solid fa-palette",
    "fa-solid fa-utensils",
    "fa-solid fa-film",
    "fa-solid fa-basketball",
    "fa-solid fa-futbol",
    "fa-solid fa-dumbbell",
    "fa-solid fa-campground",
    "fa-solid fa-code",
    "fa-solid fa-chess",
    "fa-solid fa-guitar",
    "fa-solid fa-running",
    "fa-solid fa-swimmer",
];
