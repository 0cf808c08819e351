#[derive(Debug, Clone)]
pub enum Message {
    // === MENU MESSAGES ===
    MenuTitle,
    MenuAddTask,
    MenuViewTasks,
    MenuMarkDone,
    MenuDeleteTask,
    MenuExit,
    InvalidMenuChoice,
    Goodbye,

    // === TASK MESSAGES ===
    TaskAdded(String), // description
    TaskDescriptionEmpty,
    TaskMarkedDone(u32, String), // id, description
    TaskDeleted(u32),            // id
    TaskNotFoundWithId(i64),
    InvalidTaskId,

    // === VIEW MESSAGES ===
    TaskListTitle,
    TaskListEmpty,
    TaskStatusDone,
    TaskStatusPending,

    // === STORAGE MESSAGES ===
    TasksFileCorrupted(String), // file name
    TasksLoadFailed(String),    // error
    TasksSaveFailed(String),    // error

    // === PROMPTS ===
    PromptMenuChoice,
    PromptTaskDescription,
    PromptTaskIdDone,
    PromptTaskIdDelete,

    // === GENERAL MESSAGES ===
    InputClosed,
    InputFailed(String), // error
}
