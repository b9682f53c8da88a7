//! Standard vocabulary: the classic soul verb table, adverbs, intensifiers
//! and body parts.
//!
//! Verb templates use the markup described in [`crate::template`].

use soul_foundation::TemplateError;

use crate::verb::VerbDefinition;

/// Words that strengthen the adverb after them ("very happily").
pub const INTENSIFIERS: &[&str] = &["very", "quite", "barely", "extremely", "somewhat", "almost"];

/// Body-part words and the phrase each one renders as.
pub const BODYPARTS: &[(&str, &str)] = &[
    ("hand", "on the hand"),
    ("forehead", "on the forehead"),
    ("head", "on the head"),
    ("face", "in the face"),
    ("hurts", "where it hurts"),
    ("eye", "in the eye"),
    ("ear", "on the ear"),
    ("stomach", "in the stomach"),
    ("butt", "on the butt"),
    ("behind", "on the behind"),
    ("leg", "on the leg"),
    ("foot", "on the foot"),
    ("toe", "on the right toe"),
    ("nose", "on the nose"),
    ("neck", "in the neck"),
    ("back", "on the back"),
    ("arm", "on the arm"),
    ("chest", "on the chest"),
    ("cheek", "on the cheek"),
    ("side", "in the side"),
    ("everywhere", "everywhere"),
    ("shoulder", "on the shoulder"),
    ("kneecap", "on the kneecap"),
    ("ankle", "on the ankle"),
];

/// Base adverbs, one per line.
pub const ADVERBS: &str = r"
absently
absentmindedly
accidentally
admiringly
affectionately
aggressively
aimlessly
airily
alertly
amusedly
angrily
anxiously
apologetically
appreciatively
approvingly
arrogantly
awkwardly
badly
bashfully
beautifully
bitterly
blankly
blissfully
boldly
bravely
breathlessly
briefly
brightly
briskly
broadly
busily
calmly
carefully
carelessly
casually
cautiously
charmingly
cheekily
cheerfully
childishly
clumsily
coldly
comfortably
compassionately
confidently
confusedly
contemptuously
contentedly
coolly
courageously
coyly
crazily
cruelly
curiously
cynically
daintily
darkly
decisively
deeply
defiantly
deliberately
delightedly
demonically
desperately
determinedly
devilishly
diabolically
disappointedly
disdainfully
disgustedly
dizzily
doubtfully
down
dreamily
drunkenly
dumbly
eagerly
earnestly
elegantly
embarrassedly
emotionally
encouragingly
energetically
enthusiastically
enviously
evilly
excitedly
expectantly
faintly
fanatically
fearfully
fiendishly
fiercely
firmly
flirtatiously
fondly
foolishly
forcefully
formally
frantically
freely
fretfully
from the cold
from the heart
funnily
furiously
gallantly
generously
gently
gingerly
gladly
gleefully
gloomily
gracefully
graciously
gratefully
greedily
grimly
grumpily
guiltily
half heartedly
happily
hard
harshly
hastily
heartily
heavily
helpfully
helplessly
hesitantly
hopefully
hopelessly
horribly
humbly
hungrily
hurriedly
hysterically
idly
impatiently
indifferently
innocently
inquiringly
insanely
intensely
ironically
irritably
jealously
jeeringly
jokingly
joyfully
kindly
knowingly
lazily
lewdly
lightly
longingly
loudly
lovingly
madly
maliciously
manically
meaningfully
meekly
menacingly
merrily
mischievously
miserably
mockingly
modestly
morosely
mournfully
mysteriously
naughtily
nervously
nicely
nobly
noisily
nonchalantly
now
obediently
oddly
openly
optimistically
outrageously
painfully
passionately
patiently
peacefully
pensively
perfectly
persistently
pitifully
plainly
playfully
pleasantly
poetically
politely
pompously
proudly
provocatively
quickly
quietly
randomly
rapidly
recklessly
regretfully
reluctantly
respectfully
restlessly
romantically
rudely
ruefully
sadistically
sadly
sarcastically
sardonically
savagely
scornfully
seductively
seriously
shakily
sheepishly
shyly
silently
sincerely
skeptically
sleepily
slowly
slyly
smugly
sneakily
snobbishly
softly
solemnly
soothingly
sorrowfully
soundly
sternly
stiffly
stonily
strangely
stubbornly
stupidly
suddenly
suggestively
sulkily
suspiciously
sweetly
sympathetically
tenderly
tensely
thankfully
thoughtfully
tightly
timidly
tiredly
tragically
triumphantly
uncertainly
uncomfortably
unconditionally
understandingly
uneasily
unhappily
up
up and down in aggravation
vaguely
viciously
violently
warmly
wearily
wickedly
wildly
wisely
wistfully
woefully
worriedly
wryly
zealously
";

type Defaults = (Option<&'static str>, Option<&'static str>, Option<&'static str>);

const NONE: Defaults = (None, None, None);

const fn how(adverb: &'static str) -> Defaults {
    (Some(adverb), None, None)
}

const fn what(message: &'static str) -> Defaults {
    (None, Some(message), None)
}

const fn place(bodypart: &'static str) -> Defaults {
    (None, None, Some(bodypart))
}

/// The template layout of one table row.
enum Row {
    Stem(&'static str),
    Previous(&'static str),
    Physical(&'static str),
    Short(&'static str),
    Personal(&'static str, &'static str),
    Simple(&'static str, Option<&'static str>),
    Dual(&'static str, &'static str),
    Quad([&'static str; 4]),
}

use Row::{Dual, Personal, Physical, Previous, Quad, Short, Simple, Stem};

#[rustfmt::skip]
const VERBS: &[(&str, Row, Defaults)] = &[
    ("flex", Dual("flex {YOUR} muscles {HOW}", "flexes {YOUR} muscles {HOW}"), NONE),
    ("snort", Simple("snort$ {HOW} {AT}", Some("at")), NONE),
    ("pant", Simple("pant$ {HOW} {AT}", Some("at")), how("heavily")),
    ("hmm", Simple("hmm$ {HOW} {AT}", Some("at")), NONE),
    ("ack", Simple("ack$ {HOW} {AT}", Some("at")), NONE),
    ("guffaw", Simple("guffaw$ {HOW} {AT}", Some("at")), NONE),
    ("raise", Simple("{HOW} raise$ an eyebrow {AT}", Some("at")), NONE),
    ("snap", Simple("snap$ {YOUR} fingers {AT}", Some("at")), NONE),
    ("lust", Stem("for"), NONE),
    ("burp", Stem("at"), how("rudely")),
    ("bump", Stem("into"), how("clumsily")),
    ("wink", Stem("at"), how("suggestively")),
    ("smile", Stem("at"), how("happily")),
    ("yawn", Stem("at"), NONE),
    ("swoon", Stem("at"), how("romantically")),
    ("sneer", Stem("at"), how("disdainfully")),
    ("talk", Simple("want$ to talk {AT} {HOW}", Some("to")), NONE),
    ("beam", Stem("at"), NONE),
    ("point", Stem("at"), NONE),
    ("grin", Stem("at"), how("evilly")),
    ("laugh", Stem("at"), NONE),
    ("nod", Stem("at"), how("solemnly")),
    ("wave", Stem("at"), how("happily")),
    ("cackle", Stem("at"), how("gleefully")),
    ("chuckle", Stem("at"), NONE),
    ("bow", Stem("to"), NONE),
    ("surrender", Stem("to"), NONE),
    ("sit", Stem("in front of"), how("down")),
    ("stand", Stem("in front of"), how("up")),
    ("capitulate", Stem("to"), how("unconditionally")),
    ("glare", Stem("at"), how("stonily")),
    ("giggle", Stem("at"), how("merrily")),
    ("groan", Stem("at"), NONE),
    ("grunt", Stem("at"), NONE),
    ("growl", Stem("at"), NONE),
    ("breathe", Stem("at"), how("heavily")),
    ("argh", Stem("at"), NONE),
    ("scowl", Stem("at"), how("darkly")),
    ("snarl", Stem("at"), NONE),
    ("recoil", Stem("from"), how("with fear")),
    ("moan", Stem("at"), NONE),
    ("howl", Stem("at"), how("in pain")),
    ("puke", Stem("on"), NONE),
    ("drool", Stem("on"), NONE),
    ("sneeze", Stem("at"), how("loudly")),
    ("spit", Stem("on"), NONE),
    ("stare", Stem("at"), NONE),
    ("whistle", Stem("at"), how("appreciatively")),
    ("applaud", Stem(""), NONE),
    ("leer", Stem("at"), NONE),
    ("agree", Stem("with"), NONE),
    ("believe", Personal("believe$ in {MY}self {HOW}", "believe$ {WHO} {HOW}"), NONE),
    ("understand", Personal("understand$ {HOW}", "understand$ {WHO} {HOW}"), how("now")),
    ("disagree", Stem("with"), NONE),
    ("fart", Stem("at"), NONE),
    ("dance", Stem("with"), NONE),
    ("spin", Stem("around"), how("dizzily")),
    ("flirt", Stem("with"), NONE),
    ("meow", Stem("at"), NONE),
    ("bark", Stem("at"), NONE),
    ("slide", Simple("slip$ and slide$ {HOW}", None), NONE),
    ("ogle", Previous(""), NONE),
    ("pet", Simple("pet$ {WHO} {HOW} {WHERE}", None), NONE),
    ("barf", Stem("on"), NONE),
    ("purr", Stem("at"), NONE),
    ("curtsey", Stem("before"), NONE),
    ("puzzle", Simple("look$ {HOW} puzzled {AT}", Some("at")), NONE),
    ("grovel", Stem("before"), NONE),
    ("listen", Stem("to"), NONE),
    ("tongue", Simple("stick$ {YOUR} tongue out {HOW} {AT}", Some("at")), NONE),
    ("swing", Simple("swing$ {YOUR} arms {HOW} {AT}", Some("at")), how("wildly")),
    ("apologize", Stem("to"), NONE),
    ("complain", Stem("about"), NONE),
    ("rotate", Personal("rotate$ {HOW}", "rotate$ {WHO} {HOW}"), NONE),
    ("excuse", Personal("{HOW} excuse$ {MY}self", "{HOW} excuse$ {MY}self to {WHO}"), NONE),
    ("beg", Personal("beg$ {HOW}", "beg$ {WHO} for mercy {HOW}"), NONE),
    ("fear", Personal("shiver$ {HOW} with fear", "fear$ {WHO} {HOW}"), NONE),
    ("headshake", Simple("shake$ {YOUR} head {AT} {HOW}", Some("at")), NONE),
    ("shake", Simple("shake$ {AT} {HOW}", Some("")), how("like a bowlful of jello")),
    ("stink", Personal("smell$ {YOUR} armpits. Eeeww!", "smell$ {POSS} armpits. Eeeww!"), NONE),
    ("grimace", Simple("{HOW} make$ an awful face {AT}", Some("at")), NONE),
    ("stomp", Personal("stomp$ {YOUR} foot {HOW}", "stomp$ on {POSS} foot {HOW}"), NONE),
    ("snigger", Stem("at"), how("jeeringly")),
    ("watch", Quad([
        "watch the surroundings {HOW}",
        "watches the surroundings {HOW}",
        "watch {WHO} {HOW}",
        "watches {WHO} {HOW}",
    ]), how("carefully")),
    ("scratch", Quad([
        "scratch {MY}self {HOW} {WHERE}",
        "scratches {MY}self {HOW} {WHERE}",
        "scratch {WHO} {HOW} {WHERE}",
        "scratches {WHO} {HOW} {WHERE}",
    ]), place("on the head")),
    ("tap", Personal("tap$ {YOUR} foot {HOW}", "tap$ {WHO} {WHERE}"), (Some("impatiently"), None, Some("on the shoulder"))),
    ("wobble", Simple("wobble$ {AT} {HOW}", Some("")), NONE),
    ("move", Simple("move$ out of the way {HOW}", None), how("thoughtfully")),
    ("yodel", Simple("yodel$ a merry tune {HOW}", None), NONE),
    ("spray", Simple("spray$ {HOW} {AT}", Some("all over")), NONE),
    ("spill", Simple("spill$ {YOUR} drink {HOW} {AT}", Some("all over")), NONE),
    ("hello", Personal("greet$ everyone {HOW}", "greet$ {WHO} {HOW}"), NONE),
    ("hi", Personal("greet$ everyone {HOW}", "greet$ {WHO} {HOW}"), NONE),
    ("smoke", Personal(
        "smoke$ a cigar, and blow$ out the smoke.",
        "smoke$ a cigar, and blow$ the smoke at {WHO}.",
    ), NONE),

    // Message verbs
    ("curse", Personal("curse$ {WHAT} {HOW}", "curse$ {WHO} {HOW}"), NONE),
    ("swear", Simple("swear$ {WHAT} {AT} {HOW}", Some("before")), NONE),
    ("criticize", Personal("criticize$ {WHAT} {HOW}", "criticize$ {WHO} {HOW}"), NONE),
    ("lie", Personal("lie$ {MSG} {HOW}", "lie$ to {WHO} {HOW}"), NONE),
    ("mutter", Personal("mutter$ {MSG} {HOW}", "mutter$ {MSG} to {WHO} {HOW}"), NONE),
    ("say", Simple("{HOW} say$ {MSG} {AT}", Some("to")), what("'nothing")),
    ("babble", Simple("babble$ {MSG} {HOW} {AT}", Some("to")), (Some("incoherently"), Some("'something"), None)),
    ("chant", Simple("{HOW} chant$: {WHAT}", Some("")), what("Hare Krishna Krishna Hare Hare")),
    ("sing", Simple("sing$ {WHAT} {HOW} {AT}", Some("to")), NONE),
    ("go", Dual("go {MSG} {HOW}", "goes {MSG} {HOW}"), what("ah")),
    ("hiss", Quad([
        "hiss {MSG} {HOW}",
        "hisses {MSG} {HOW}",
        "hiss {MSG} to {WHO} {HOW}",
        "hisses {MSG} to {WHO} {HOW}",
    ]), NONE),
    ("answer", Simple("{HOW} answer$ {AT}: {WHAT}", Some("")), what("ehh...")),
    ("reply", Quad([
        "{HOW} reply: {WHAT}",
        "{HOW} replies: {WHAT}",
        "{HOW} reply to {WHO}: {WHAT}",
        "{HOW} replies to {WHO}: {WHAT}",
    ]), what("ehh...")),
    ("exclaim", Simple("{HOW} exclaim$ {AT}: {WHAT}!", Some("")), what("no way")),
    ("quote", Simple("{HOW} quote$ {AT} {MSG}", Some("to")), NONE),
    ("ask", Simple("{HOW} ask$ {AT}: {WHAT}?", Some("")), what("ehh...")),
    ("request", Simple("{HOW} request$ {AT} {WHAT}", Some("")), what("a moment")),
    ("mumble", Simple("mumble$ {MSG} {HOW} {AT}", Some("to")), NONE),
    ("murmur", Simple("murmur$ {MSG} {HOW} {AT}", Some("to")), NONE),
    ("scream", Simple("scream$ {MSG} {HOW} {AT}", Some("at")), how("loudly")),
    ("yell", Simple("yell$ {MSG} {HOW} {AT}", Some("at")), how("in a high pitched voice")),
    ("utter", Simple("{HOW} utter$ {MSG} {AT}", Some("to")), what("ehh...")),
    ("whisper", Simple("whisper$ {MSG} {HOW} {AT}", Some("to")), NONE),
    ("command", Simple("command$ {WHO} {HOW} to {WHAT}", None), what("follow orders")),

    // Verbs that need a person
    ("glance", Simple("glance$ {HOW} at {WHO}", None), NONE),
    ("hide", Simple("hide$ {HOW} behind {WHO}", None), NONE),
    ("finger", Simple("give$ {WHO} the finger", None), NONE),
    ("mercy", Simple("beg$ {WHO} for mercy", None), NONE),
    ("jerk", Simple("jerk$ {WHO} {HOW}", None), how("briskly")),
    ("insult", Simple("{HOW} spew$ profanities at {WHO}", None), how("angrily")),
    ("gripe", Previous("to"), NONE),
    ("peer", Previous("at"), NONE),
    ("gaze", Previous("at"), NONE),
    ("chase", Previous("after"), how("angrily")),
    ("remember", Simple("remember$ {AT} {HOW}", Some("")), NONE),
    ("surprise", Previous(""), NONE),
    ("pounce", Physical(""), how("playfully")),
    ("feel", Physical(""), how("softly")),
    ("bite", Personal("{HOW} bite$ {YOUR} lip", "bite$ {WHO} {HOW} {WHERE}"), NONE),
    ("lick", Simple("lick$ {WHO} {HOW} {WHERE}", None), NONE),
    ("caper", Personal("caper$ {HOW} about", "caper$ around {WHO} {HOW}"), how("merrily")),
    ("beep", Personal("{HOW} beep$ {MY}self {WHERE}", "{HOW} beep$ {WHO} {WHERE}"), (Some("triumphantly"), None, Some("on the nose"))),
    ("blink", Personal("blink$ {HOW}", "blink$ {HOW} at {WHO}"), NONE),
    ("knock", Physical(""), place("on the head")),
    ("bonk", Physical(""), place("on the head")),
    ("bop", Physical(""), place("on the head")),
    ("stroke", Physical(""), place("on the cheek")),
    ("hold", Physical(""), place("in {YOUR} arms")),
    ("embrace", Physical(""), place("in {YOUR} arms")),
    ("shove", Physical(""), (Some("briskly"), None, Some("to the side"))),
    ("push", Physical(""), place("to the side")),
    ("pull", Simple("pull$ at {WHO}", None), NONE),
    ("rub", Physical(""), (Some("gently"), None, Some("on the back"))),
    ("handshake", Simple("shake$ hands with {WHO}", None), NONE),
    ("tickle", Previous(""), NONE),
    ("worship", Previous(""), NONE),
    ("admire", Previous(""), NONE),
    ("mock", Previous(""), NONE),
    ("tease", Previous(""), NONE),
    ("taunt", Previous(""), NONE),
    ("strangle", Previous(""), NONE),
    ("hate", Previous(""), NONE),
    ("fondle", Previous(""), NONE),
    ("squeeze", Previous(""), how("fondly")),
    ("comfort", Previous(""), NONE),
    ("nudge", Physical(""), how("suggestively")),
    ("slap", Physical(""), place("in the face")),
    ("hit", Physical(""), place("in the face")),
    ("kick", Physical(""), how("hard")),
    ("tackle", Simple("tackle$ {WHO} {HOW}", Some("")), NONE),
    ("spank", Physical(""), place("on the butt")),
    ("pat", Physical(""), place("on the head")),
    ("punch", Dual("punch {WHO} {HOW} {WHERE}", "punches {WHO} {HOW} {WHERE}"), place("in the eye")),
    ("hug", Previous(""), NONE),
    ("want", Previous(""), NONE),
    ("pinch", Dual("pinch {WHO} {HOW} {WHERE}", "pinches {WHO} {HOW} {WHERE}"), NONE),
    ("kiss", Dual("kiss {WHO} {HOW} {WHERE}", "kisses {WHO} {HOW} {WHERE}"), NONE),
    ("caress", Dual("caress {WHO} {HOW} {WHERE}", "caresses {WHO} {HOW} {WHERE}"), place("on the cheek")),
    ("smooch", Dual("smooch {WHO} {HOW}", "smooches {WHO} {HOW}"), NONE),
    ("envy", Dual("envy {WHO} {HOW}", "envies {WHO} {HOW}"), NONE),
    ("touch", Dual("touch {WHO} {HOW} {WHERE}", "touches {WHO} {HOW} {WHERE}"), NONE),
    ("knee", Physical(""), place("where it hurts")),
    ("love", Previous(""), NONE),
    ("adore", Previous(""), NONE),
    ("grope", Previous(""), NONE),
    ("poke", Physical(""), place("in the ribs")),
    ("snuggle", Previous(""), NONE),
    ("kneel", Simple("{HOW} fall$ on {YOUR} knees {AT}", Some("in front of")), NONE),
    ("trust", Previous(""), NONE),
    ("like", Previous(""), NONE),
    ("greet", Previous(""), NONE),
    ("welcome", Previous(""), NONE),
    ("thank", Previous(""), NONE),
    ("cuddle", Previous(""), NONE),
    ("salute", Previous(""), NONE),
    ("french", Simple("give$ {WHO} a REAL kiss, it seems to last forever", None), NONE),
    ("nibble", Simple("nibble$ {HOW} on {POSS} ear", None), NONE),
    ("ruffle", Simple("ruffle$ {POSS} hair {HOW}", None), NONE),
    ("ignore", Previous(""), NONE),
    ("forgive", Previous(""), NONE),
    ("congratulate", Previous(""), NONE),
    ("ayt", Simple("wave$ {YOUR} hand in front of {POSS} face, {IS} {SUBJ} {HOW} there?", None), NONE),

    // Verbs that never take a person
    ("roll", Simple("roll$ {YOUR} eyes {HOW}", None), how("to the ceiling")),
    ("boggle", Simple("boggle$ {HOW} at the concept", None), NONE),
    ("cheer", Short(""), how("enthusiastically")),
    ("twiddle", Simple("twiddle$ {YOUR} thumbs {HOW}", None), NONE),
    ("wiggle", Simple("wiggle$ {YOUR} bottom {AT} {HOW}", Some("at")), NONE),
    ("wrinkle", Simple("wrinkle$ {YOUR} nose {AT} {HOW}", Some("at")), NONE),
    ("thumb", Simple("{HOW} suck$ {YOUR} thumb", None), NONE),
    ("flip", Simple("flip$ {HOW} head over heels", None), NONE),
    ("cry", Dual("cry {HOW}", "cries {HOW}"), NONE),
    ("ah", Dual("go 'ah' {HOW}", "goes 'ah' {HOW}"), NONE),
    ("clear", Simple("clear$ {YOUR} throat {HOW}", None), NONE),
    ("sob", Short(""), NONE),
    ("lag", Short(""), how("helplessly")),
    ("whine", Short(""), NONE),
    ("cringe", Simple("cringe$ {HOW}", None), how("in terror")),
    ("sweat", Short(""), NONE),
    ("gurgle", Short(""), NONE),
    ("grumble", Short(""), NONE),
    ("panic", Short(""), NONE),
    ("pace", Simple("start$ pacing {HOW}", None), how("impatiently")),
    ("pale", Simple("turn$ white as ashes {HOW}", None), NONE),
    ("die", Dual("fall {HOW} down and play dead", "falls {HOW} to the ground, dead"), NONE),
    ("sleep", Dual("fall asleep {HOW}", "falls asleep {HOW}"), how("soundly")),
    ("stumble", Short(""), NONE),
    ("bounce", Short(""), NONE),
    ("sulk", Short(""), how("in the corner")),
    ("strut", Short(""), how("proudly")),
    ("sniff", Short(""), NONE),
    ("snivel", Short(""), how("pathetically")),
    ("snore", Short(""), NONE),
    ("clue", Simple("need$ a clue {HOW}", None), NONE),
    ("stupid", Simple("look$ {HOW} stupid", None), NONE),
    ("bored", Simple("look$ {HOW} bored", None), NONE),
    ("snicker", Short(""), NONE),
    ("smirk", Short(""), NONE),
    ("jump", Simple("jump$ {HOW}", None), how("up and down in aggravation")),
    ("squint", Short(""), NONE),
    ("huff", Short(""), NONE),
    ("puff", Short(""), NONE),
    ("fume", Short(""), NONE),
    ("steam", Short(""), NONE),
    ("choke", Short(""), NONE),
    ("faint", Short(""), NONE),
    ("shrug", Short(""), NONE),
    ("pout", Short(""), NONE),
    ("hiccup", Short(""), NONE),
    ("frown", Short(""), NONE),
    ("gasp", Short(""), how("in astonishment")),
    ("think", Short(""), how("carefully")),
    ("ponder", Short(""), how("over some problem")),
    ("wonder", Stem("at"), NONE),
    ("clap", Short(""), NONE),
    ("sigh", Short(""), NONE),
    ("cough", Short(""), how("noisily")),
    ("shiver", Short(""), how("from the cold")),
    ("tremble", Short(""), NONE),
    ("twitch", Dual("twitch {HOW}", "twitches {HOW}"), NONE),
    ("bitch", Dual("bitch {HOW}", "bitches {HOW}"), NONE),
    ("blush", Dual("blush {HOW}", "blushes {HOW}"), NONE),
    ("stretch", Dual("stretch {HOW}", "stretches {HOW}"), NONE),
    ("relax", Dual("relax {HOW}", "relaxes {HOW}"), NONE),
    ("duck", Personal("duck$ {HOW} out of the way", "duck$ {HOW} out of {POSS} way"), NONE),
];

/// Builds the standard verb table.
///
/// # Errors
///
/// Returns [`TemplateError`] if a row's markup is invalid.
pub fn base_verbs() -> Result<Vec<(&'static str, VerbDefinition)>, TemplateError> {
    VERBS
        .iter()
        .map(|(name, row, defaults)| Ok((*name, definition(row, *defaults)?)))
        .collect()
}

fn definition(row: &Row, (adverb, message, bodypart): Defaults) -> Result<VerbDefinition, TemplateError> {
    let mut verb = match row {
        Stem(preposition) => VerbDefinition::stem(preposition),
        Previous(preposition) => VerbDefinition::previous(preposition)?,
        Physical(preposition) => VerbDefinition::physical(preposition)?,
        Short(preposition) => VerbDefinition::short(preposition)?,
        Personal(untargeted, targeted) => VerbDefinition::personal(untargeted, targeted)?,
        Simple(text, at) => VerbDefinition::simple(text, *at)?,
        Dual(first, third) => VerbDefinition::dual(first, third)?,
        Quad(texts) => VerbDefinition::quad(*texts)?,
    };
    if let Some(adverb) = adverb {
        verb = verb.with_adverb(adverb);
    }
    if let Some(message) = message {
        verb = verb.with_message(message);
    }
    if let Some(bodypart) = bodypart {
        verb = verb.with_bodypart(bodypart)?;
    }
    Ok(verb)
}
