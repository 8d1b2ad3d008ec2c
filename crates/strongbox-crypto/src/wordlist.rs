// SPDX-FileCopyrightText: 2026 Strongbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed passphrase word list: 256 distinct lowercase words, 8 bits each.

pub const WORDS: [&str; 256] = [
    "acorn", "actor", "adobe", "agent", "album", "alley", "amber", "anchor", "angle",
    "ankle", "apple", "apron", "arena", "armor", "arrow", "atlas", "attic", "autumn",
    "bacon", "badge", "bagel", "baker", "bamboo", "banana", "banjo", "barrel", "basket",
    "beacon", "beaver", "berry", "bison", "blanket", "blossom", "border", "bottle",
    "bounty", "bramble", "breeze", "brick", "bridge", "bronze", "bucket", "buffalo",
    "bugle", "butter", "cabin", "cactus", "camel", "candle", "canoe", "canyon", "carbon",
    "carpet", "castle", "cedar", "cello", "cherry", "chimney", "cider", "cinema", "circus",
    "citrus", "clover", "cobalt", "coconut", "coffee", "comet", "copper", "coral",
    "cotton", "cougar", "crater", "crayon", "cricket", "crystal", "cup", "dagger", "daisy",
    "delta", "denim", "desert", "diamond", "dolphin", "domino", "donkey", "dragon", "drum",
    "eagle", "easel", "echo", "eclipse", "elbow", "elephant", "ember", "emerald", "engine",
    "falcon", "feather", "fennel", "ferry", "fiddle", "fig", "flame", "flute", "forest",
    "fossil", "fountain", "fox", "galaxy", "garden", "garlic", "gazelle", "geyser",
    "ginger", "glacier", "goblet", "gopher", "granite", "grape", "gravel", "guitar",
    "hammer", "harbor", "harp", "hazel", "hedge", "helmet", "heron", "hickory", "honey",
    "horizon", "house", "iceberg", "igloo", "island", "ivory", "jacket", "jaguar",
    "jasmine", "jelly", "jungle", "kayak", "kettle", "kitten", "koala", "ladder", "lagoon",
    "lantern", "lemon", "lentil", "leopard", "lilac", "lobster", "locket", "lotus",
    "magnet", "mango", "maple", "marble", "meadow", "melon", "meteor", "mirror", "mitten",
    "monkey", "mosaic", "moss", "mountain", "muffin", "nature", "nectar", "needle",
    "nickel", "noodle", "nutmeg", "oasis", "ocean", "olive", "onion", "orbit", "orchid",
    "otter", "oyster", "paddle", "palace", "panda", "paper", "parrot", "peach", "pebble",
    "pepper", "piano", "pickle", "pigeon", "pillow", "pine", "planet", "plum", "pocket",
    "pollen", "pony", "poppy", "puzzle", "quartz", "queen", "quill", "rabbit", "radar",
    "radish", "raven", "reef", "ribbon", "river", "rocket", "saddle", "saffron", "salmon",
    "sapphire", "satin", "sequoia", "shadow", "shell", "silver", "sketch", "sparrow",
    "spider", "spruce", "squash", "summit", "sunset", "swan", "tablet", "teapot",
    "thistle", "thunder", "tiger", "timber", "tomato", "topaz", "tractor", "trumpet",
    "tulip", "tundra", "turtle", "umbrella", "valley", "velvet", "violin", "volcano",
    "waffle", "walnut", "walrus", "window", "wizard", "yellow", "zebra",
];
