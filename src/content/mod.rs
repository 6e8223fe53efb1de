//! The built-in story catalog
//!
//! The compiled-in love story of Gabriel and Clarisse: a comment under a
//! calculus video, a reply, and every road that can grow from it. Scene
//! order matters; gates assume the forward-only traversal and the ending
//! hard-stop. Multi-tag gates list tags that genuinely co-occur on one
//! path, never alternatives.

use crate::types::catalog::StoryCatalog;
use crate::types::scene::{Choice, Scene};
use crate::types::tag::ChoiceTag::*;

/// The built-in catalog. Infallible: the content below is validated by the
/// catalog constructor and pinned by the tests at the bottom of this file.
pub fn love_story() -> StoryCatalog {
    StoryCatalog::new("The Equation of Love", scenes())
        .expect("the built-in catalog is valid by construction")
}

fn scenes() -> Vec<Scene> {
    vec![
        // Chapter 1 - the comment
        Scene::narrative(
            0,
            "March 3rd, 2023. Gabriel was watching a video about calculus when he \
             decided to leave a comment about integrals. He had no idea that this \
             small act would change his life forever...",
        )
        .with_chapter("Chapter 1", "The Comment"),
        Scene::narrative(
            1,
            "\u{1f4ac} 'Excellent explanation of integrals! I finally understood the \
             substitution rule. Thank you!' - Gabriel's comment",
        ),
        Scene::choice(
            2,
            "A few minutes later... a notification appears. Someone answered his \
             comment! It was a girl named Clarisse...",
            vec![
                Choice::new(
                    "\u{1f4ac} 'Glad it helped! I struggled with that too \u{263a}'",
                    "Clarisse answered with warmth and a smile. Something in that reply \
                     made Gabriel's heart beat faster.",
                    InterestedResponse,
                ),
                Choice::new(
                    "\u{1f643} 'Well, it's pretty basic stuff.'",
                    "The reply was a little dry. Gabriel could not tell whether something \
                     was wrong or whether that was simply her way...",
                    DryResponse,
                ),
                Choice::new(
                    "\u{1f494} [She never replies]",
                    "The silence echoed. Maybe she had not seen it, or maybe the comment \
                     just did not catch her eye. Gabriel felt a little sad.",
                    Ignored,
                ),
            ],
        ),
        // Chapter 2A - friendship (warm reply)
        Scene::narrative(
            3,
            "Over the following days, Gabriel and Clarisse kept talking. What began \
             as help with mathematics turned into long conversations about life...",
        )
        .with_chapter("Chapter 2", "A Friendship Blooms")
        .with_requirement(InterestedResponse),
        Scene::choice(
            4,
            "January 16th, 2024 - 2:30 in the morning. They were still talking...",
            vec![
                Choice::new(
                    "\u{1f4f1} Keep it to messages",
                    "The messages flowed naturally. Every notification brought a smile \
                     to Gabriel's face.",
                    TextOnly,
                ),
                Choice::new(
                    "\u{1f3a7} 'How about a call? I want to hear your voice'",
                    "April 27th - the first call. When Gabriel heard Clarisse's voice he \
                     knew he was lost. It was the sweetest voice he had ever heard.",
                    VoiceCalls,
                ),
            ],
        )
        .with_requirement(InterestedResponse),
        // Chapter 2B - the slow road (dry reply)
        Scene::narrative(
            5,
            "Despite the cool first reply, Gabriel decided not to give up. Perhaps \
             Clarisse was simply shy, or careful...",
        )
        .with_chapter("Chapter 2", "Building Bridges")
        .with_requirement(DryResponse),
        Scene::choice(
            6,
            "With patience and kindness, Gabriel kept trying to know her better. \
             Small gestures, gentle comments, always respecting her space...",
            vec![
                Choice::new(
                    "\u{2764} 'She started opening up to me'",
                    "Little by little the walls came down. Clarisse began to trust \
                     Gabriel, and their conversations grew warmer.",
                    Breakthrough,
                ),
                Choice::new(
                    "\u{1f614} 'She still keeps her distance'",
                    "Despite Gabriel's efforts, Clarisse kept a certain coldness. \
                     Perhaps it was better to accept they would only ever be acquaintances.",
                    DistantFriends,
                ),
            ],
        )
        .with_requirement(DryResponse),
        // Early endings
        Scene::narrative(
            7,
            "Sometimes love is not returned. Sometimes a planted seed finds no \
             fertile soil to grow in. Gabriel learned that not every story has a \
             happy ending, and that dreaming is still worth it...",
        )
        .with_chapter("Epilogue", "Love Did Not Bloom")
        .with_requirement(Ignored)
        .ending(),
        Scene::narrative(
            8,
            "They stayed pen pals of the small hours, trading messages for years \
             without ever hearing each other's voice. Some affections live happily \
             inside a chat window, and theirs was one of them...",
        )
        .with_chapter("Epilogue", "Words on a Screen")
        .with_requirement([InterestedResponse, TextOnly])
        .ending(),
        Scene::narrative(
            9,
            "Gabriel and Clarisse remained distant friends, exchanging polite \
             comments now and then. Not every bridge is meant to be crossed, and \
             Gabriel made peace with watching the river from his side...",
        )
        .with_chapter("Epilogue", "Distant Friends")
        .with_requirement([DryResponse, DistantFriends])
        .ending(),
        // Chapter 3 - love takes root (one opener per surviving branch)
        Scene::narrative(
            10,
            "July 25th, 2024 - the day everything changed. Gabriel and Clarisse did \
             not just say 'I love you' - they decided to date, officially. It was \
             the beginning of an even deeper journey...",
        )
        .with_chapter("Chapter 3", "Roots of Love")
        .with_requirement([InterestedResponse, VoiceCalls]),
        Scene::narrative(
            11,
            "July 25th, 2024 - the day the patience paid off. What had grown slowly \
             proved to be solid: Gabriel and Clarisse decided to date, officially, \
             and neither could stop smiling...",
        )
        .with_chapter("Chapter 3", "Patience Rewarded")
        .with_requirement([DryResponse, Breakthrough]),
        Scene::narrative(
            12,
            "The months that followed were like a tree growing... The roots of \
             their love sank deeper and held firmer, like an immortal tree. They \
             grew together, maturing through every difficulty life brought.",
        ),
        Scene::narrative(
            13,
            "They went through sad and difficult days, holding each other up with \
             strength and care. They lived days of laughter and love, dreamed \
             together, and discovered they were truly soulmates. Every tear and \
             every smile bound them closer.",
        ),
        // Chapter 4 - the proposal
        Scene::narrative(
            14,
            "A year and a half later... Gabriel knew the time had come. After \
             everything they had lived, he was absolutely certain: he wanted \
             Clarisse as his wife, forever. His heart pounded as he held the ring \
             that would change their lives...",
        )
        .with_chapter("Chapter 4", "The Big Question")
        .with_media("/images/proposal.jpg"),
        Scene::choice(
            15,
            "\u{1f48d} Gabriel kneels, a shining ring in his hand: 'Clarisse, my \
             love... after everything we have lived together, will you marry me? \
             Will you be my wife forever? \u{2764}'",
            vec![
                Choice::new(
                    "\u{1f48d} 'YES! I want to marry you!'",
                    "'YES! A thousand times yes! I want to be your wife! You are the \
                     love of my life, Gabriel!'",
                    AcceptMarriage,
                ),
                Choice::new(
                    "\u{1f605} 'It's too soon... let's wait a little longer'",
                    "'Gabriel... I love you so much, but I think it is too soon for \
                     marriage. Can we wait a little? I want to be sure...'",
                    HesitantMarriage,
                ),
                Choice::new(
                    "\u{274c} 'I'm not ready to marry'",
                    "'Gabriel... you are incredible and I love you, but I do not feel \
                     ready for marriage yet. Can we keep dating?'",
                    NotReadyMarriage,
                ),
            ],
        )
        .with_media("/images/proposal.jpg"),
        // Engagement and wedding (she said yes)
        Scene::narrative(
            16,
            "Clarisse was radiant! Gabriel slid the engagement ring onto her finger \
             and they held each other, overwhelmed. It was official - they were \
             engaged! The dream of a life together was becoming real.",
        )
        .with_requirement(AcceptMarriage)
        .with_media("/images/engagement.jpg"),
        Scene::narrative(
            17,
            "Six months later... the big day arrived! Family and friends gathered, \
             flowers everywhere, soft music, and two hearts about to be joined \
             forever...",
        )
        .with_chapter("Chapter 5", "Together Forever")
        .with_requirement(AcceptMarriage)
        .with_media("/images/wedding.jpg"),
        Scene::narrative(
            18,
            "'Do you take Clarisse as your wife, to love and respect her, in joy \
             and in sorrow, in sickness and in health?' 'YES!' 'Do you take Gabriel \
             as your husband?' 'YES!' 'You may kiss!' \u{1f492}",
        )
        .with_requirement(AcceptMarriage)
        .with_media("/images/wedding.jpg"),
        Scene::narrative(
            19,
            "The celebration was magical! Vows that made everyone cry, rings \
             exchanged with trembling hands, the most passionate kiss of their \
             lives, and an unforgettable party with everyone they loved.",
        )
        .with_requirement(AcceptMarriage)
        .with_media("/images/wedding.jpg"),
        Scene::narrative(
            20,
            "That night... finally alone as husband and wife. Under a starry sky, \
             in perfect harmony, Gabriel and Clarisse sealed their love. Sleeping \
             in each other's arms, they dreamed of a whole life of love, trust and \
             adventures together.",
        )
        .with_requirement(AcceptMarriage)
        .with_media("/images/honeymoon.jpg"),
        Scene::narrative(
            21,
            "From a simple comment about calculus all the way to the altar... what \
             a journey!\n\nEvery reply, every late-night call, every 'yes' brought \
             us here. From shy messages to mornings that found us still talking, \
             from the first 'I love you' to this sacred altar.\n\nNow, as husband \
             and wife, I promise to love you at every new dawn, through every \
             challenge life brings, in every dream we make real together.\n\nOur \
             equation of love is complete: ME + YOU = FOREVER",
        )
        .with_requirement([InterestedResponse, AcceptMarriage])
        .with_media("/images/wedding.jpg"),
        Scene::narrative(
            22,
            "And so Gabriel and Clarisse lived happily ever after...\n\nThey built \
             a beautiful family, faced every one of life's challenges side by \
             side, laughed together every day, and grew old holding hands.\n\n\
             Their love story, begun with a simple comment about mathematics, \
             became the most beautiful equation of life: true love, eternal and \
             infinite.\n\nTHE END",
        )
        .with_requirement(AcceptMarriage)
        .with_media("/images/family.jpg")
        .ending(),
        // Alternate endings to the proposal
        Scene::narrative(
            23,
            "Gabriel and Clarisse kept dating, building their foundation stronger \
             still. They knew the wedding would come at the perfect moment, when \
             both were completely ready for that step...",
        )
        .with_chapter("Chapter 5", "Waiting for the Right Moment")
        .with_requirement(HesitantMarriage)
        .ending(),
        Scene::narrative(
            24,
            "The love of Gabriel and Clarisse went on blooming at their own pace. \
             There was no rush - they had a whole life ahead to build their dreams \
             together, step by step...",
        )
        .with_chapter("Chapter 5", "Love Without Haste")
        .with_requirement(NotReadyMarriage)
        .ending(),
    ]
}
