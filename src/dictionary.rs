//! Built-in BNS word list.
//!
//! Declaration order is significant: it breaks ties between words with the same
//! match score.

pub const WORDS: &[&str] = &[
    // sound and rhythm
    "beat", "bass", "drum", "kick", "snare", "hat", "clap", "loop", "riff", "hook",
    "tone", "note", "chord", "key", "tempo", "bpm", "groove", "swing", "pulse", "sync",
    "echo", "delay", "reverb", "fade", "drop", "build", "break", "fill", "roll", "shuffle",
    "synth", "pad", "lead", "arp", "sub", "wave", "saw", "sine", "noise", "glitch",
    "vinyl", "tape", "lofi", "dub", "trap", "funk", "soul", "jazz", "rock", "pop",
    "folk", "disco", "acid", "rave", "dance", "chill", "vibe", "mix", "remix", "stem",
    "vocal", "choir", "piano", "organ", "guitar", "string", "horn", "flute", "bell", "gong",
    "hum", "buzz", "ring", "chime", "harp", "tabla", "sitar", "koto", "oud", "cello",
    // nature and atmosphere
    "rain", "storm", "wind", "fire", "ice", "sun", "moon", "star", "sky", "sea",
    "wave-rider", "night", "dawn", "dusk", "fog", "mist", "snow", "tide", "void", "dust",
    "glow", "haze", "neon", "chrome", "gold", "silver", "iron", "stone", "glass", "smoke",
    // motion and feeling
    "rise", "fall", "spin", "flow", "run", "fly", "dream", "hope", "love", "rage",
    "calm", "dark", "deep", "high", "low", "slow", "fast", "warm", "cold", "wild",
    // chain and code
    "block", "chain", "hash", "node", "mint", "coin", "sat", "byte", "bit", "root",
    "key-pair", "seed", "miner", "genesis", "halving", "ledger", "vault", "orb", "zero", "one",
    "404", "808", "909", "303", "24-7", "x-ray", "b-side", "a-side", "lo-fi", "hi-fi",
];
