use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{InspectError, Result};

macro_rules! control_types {
    ($($name:ident = $id:literal),+ $(,)?) => {
        /// UI Automation control types, keyed by their numeric ids.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum ControlType {
            $($name = $id),+
        }

        impl ControlType {
            pub const ALL: &'static [ControlType] = &[$(ControlType::$name),+];

            pub fn id(self) -> i32 {
                self as i32
            }

            pub fn from_id(id: i32) -> Result<Self> {
                match id {
                    $($id => Ok(ControlType::$name),)+
                    other => Err(InspectError::UnknownControlType(other)),
                }
            }

            pub fn name(self) -> &'static str {
                match self {
                    $(ControlType::$name => stringify!($name)),+
                }
            }
        }
    };
}

control_types! {
    Button = 50000,
    Calendar = 50001,
    CheckBox = 50002,
    ComboBox = 50003,
    Edit = 50004,
    Hyperlink = 50005,
    Image = 50006,
    ListItem = 50007,
    List = 50008,
    Menu = 50009,
    MenuBar = 50010,
    MenuItem = 50011,
    ProgressBar = 50012,
    RadioButton = 50013,
    ScrollBar = 50014,
    Slider = 50015,
    Spinner = 50016,
    StatusBar = 50017,
    Tab = 50018,
    TabItem = 50019,
    Text = 50020,
    ToolBar = 50021,
    ToolTip = 50022,
    Tree = 50023,
    TreeItem = 50024,
    Custom = 50025,
    Group = 50026,
    Thumb = 50027,
    DataGrid = 50028,
    DataItem = 50029,
    Document = 50030,
    SplitButton = 50031,
    Window = 50032,
    Pane = 50033,
    Header = 50034,
    HeaderItem = 50035,
    Table = 50036,
    TitleBar = 50037,
    Separator = 50038,
    SemanticZoom = 50039,
    AppBar = 50040,
}

impl fmt::Display for ControlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// UI Automation property ids used by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PropertyId {
    BoundingRectangle = 30001,
    ProcessId = 30002,
    ControlType = 30003,
    LocalizedControlType = 30004,
    Name = 30005,
    AcceleratorKey = 30006,
    AccessKey = 30007,
    HasKeyboardFocus = 30008,
    IsKeyboardFocusable = 30009,
    IsEnabled = 30010,
    AutomationId = 30011,
    ClassName = 30012,
    HelpText = 30013,
    Culture = 30015,
    IsControlElement = 30016,
    IsContentElement = 30017,
    IsPassword = 30019,
    IsOffscreen = 30022,
    Orientation = 30023,
    FrameworkId = 30024,
    PositionInSet = 30152,
    SizeOfSet = 30153,
    HeadingLevel = 30173,
}

impl PropertyId {
    pub fn id(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// UI Automation pattern ids.
pub mod pattern {
    pub const INVOKE: i32 = 10000;
    pub const SELECTION: i32 = 10001;
    pub const VALUE: i32 = 10002;
    pub const RANGE_VALUE: i32 = 10003;
    pub const SCROLL: i32 = 10004;
    pub const EXPAND_COLLAPSE: i32 = 10005;
    pub const GRID: i32 = 10006;
    pub const GRID_ITEM: i32 = 10007;
    pub const SELECTION_ITEM: i32 = 10010;
    pub const TABLE: i32 = 10012;
    pub const TEXT: i32 = 10014;
    pub const TOGGLE: i32 = 10015;
    pub const TRANSFORM: i32 = 10016;
    pub const WINDOW: i32 = 10009;
}
