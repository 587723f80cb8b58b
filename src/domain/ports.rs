use crate::domain::model::ClassificationTrainRecord;

/// Records that expose an ordered list of class labels.
pub trait HasLabels {
    type Label;

    fn labels(&self) -> &[Self::Label];
}

impl<L> HasLabels for ClassificationTrainRecord<L> {
    type Label = L;

    fn labels(&self) -> &[L] {
        &self.labels
    }
}

impl<T: HasLabels + ?Sized> HasLabels for &T {
    type Label = T::Label;

    fn labels(&self) -> &[T::Label] {
        (**self).labels()
    }
}
