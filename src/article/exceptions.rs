//! Excepciones de pronunciación para "a"/"an"
//!
//! Sintaxis de las entradas en `tables.rs`. Una palabra presente en ambas
//! listas admite los dos artículos ("a historic", "an historic").

/// Palabras que se pronuncian con sonido consonántico inicial aunque
/// empiecen por vocal ("yoo", "won")
pub const NEEDS_A: &[&str] = &[
    // "one" /wʌn/
    "one",
    "once",
    "oneself",
    "onesie",
    "ouija",
    // "eu" /juː/
    "eu*",
    "ewe",
    "ewer",
    "ewes",
    "ewok*",
    // "u" /juː/
    "u",
    "uni",
    "unary",
    "ubiqu*",
    "ufo*",
    "ukulele*",
    "ukrain*",
    "unanim*",
    "unicorn*",
    "unicycl*",
    "unidirection*",
    "unif*",
    "unilat*",
    "union*",
    "uniq*",
    "unisex*",
    "unison*",
    "unit*",
    "univ*",
    "uran*",
    "urea*",
    "uret*",
    "urin*",
    "urol*",
    "usa*",
    "use*",
    "usu*",
    "uten*",
    "uter*",
    "uti*",
    "utop*",
    "uvul*",
    // Siglas que se deletrean empezando por "you"
    "U",
    "UFO",
    "UI",
    "UK",
    "UN",
    "UNESCO",
    "UPS",
    "URI",
    "URL",
    "US",
    "USA",
    "USB",
    "USSR",
    "UTF",
    "UV",
    "UX",
    // Admiten ambos
    "herb*",
    "historic*",
    "homage",
    "hotel",
];

/// Palabras que se pronuncian con sonido vocálico inicial aunque empiecen
/// por consonante
pub const NEEDS_AN: &[&str] = &[
    // "h" muda
    "heir*",
    "honest*",
    "honor*",
    "honour*",
    "hour*",
    // Admiten ambos
    "herb*",
    "historic*",
    "homage",
    "hotel",
    // Letras cuyo nombre empieza por vocal: "ef", "aitch", "el", "em"...
    "f",
    "h",
    "l",
    "m",
    "n",
    "r",
    "s",
    "x",
    "A",
    "E",
    "I",
    "O",
    // Siglas deletreadas
    "AI",
    "API",
    "ETA",
    "FAQ",
    "FBI",
    "FCC",
    "FDA",
    "FTP",
    "HR",
    "HTML",
    "HTTP",
    "HTTPS",
    "IDE",
    "IOU",
    "IP",
    "ISO",
    "LAN",
    "LCD",
    "LED",
    "LLC",
    "LLM",
    "MBA",
    "MIT",
    "MP",
    "MP3",
    "MRI",
    "MVP",
    "NBA",
    "NFL",
    "NGO",
    "NHS",
    "NYC",
    "OCR",
    "OS",
    "RPG",
    "RSS",
    "RSVP",
    "SDK",
    "SMS",
    "SQL",
    "SSD",
    "SSH",
    "SSL",
    "SUV",
    "XML",
    "XSS",
];
